pub mod rows;
pub mod columns;
pub mod flexible;
pub mod extract;
pub mod pairing;
pub mod classify;
pub mod report;
pub mod input;
