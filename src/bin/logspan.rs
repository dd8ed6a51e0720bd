use clap::Parser;
use logspan::classify::Severity;
use logspan::report::{self, Report};
use logspan::{extract, input};

#[derive(Parser, Debug)]
#[command(name = "logspan", version, about = "Pair START/END lifecycle events in operational logs")]
struct Cli {
    /// Input files (`-` for stdin). May be repeated.
    #[arg(required = false)]
    input: Vec<String>,

    /// Output format: json | table
    #[arg(long = "format", default_value = "json")]
    format: String,

    /// Print only a specific section: completed | orphans | incompletes | entries
    #[arg(long = "only")]
    only: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let paths = if cli.input.is_empty() {
        if atty::is(atty::Stream::Stdin) {
            anyhow::bail!("no input files given and stdin is a terminal");
        }
        vec!["-".to_string()]
    } else {
        cli.input.clone()
    };
    let text = input::read_text(&paths)?;
    let rep = report::analyze(&text);
    match cli.format.as_str() {
        "table" => print_table(&rep, cli.only.as_deref()),
        "json" => print_json(&rep, cli.only.as_deref())?,
        other => anyhow::bail!("unknown format: {other} (expected json or table)"),
    }
    Ok(())
}

fn print_json(rep: &Report, only: Option<&str>) -> anyhow::Result<()> {
    let out = match only {
        Some("completed") => serde_json::to_string_pretty(&rep.completed)?,
        Some("orphans") => serde_json::to_string_pretty(&rep.orphans)?,
        Some("incompletes") => serde_json::to_string_pretty(&rep.incompletes)?,
        Some("entries") => serde_json::to_string_pretty(&rep.entries)?,
        Some(other) => anyhow::bail!("unknown section: {other}"),
        None => serde_json::to_string_pretty(rep)?,
    };
    println!("{out}");
    Ok(())
}

fn print_table(rep: &Report, only: Option<&str>) {
    let want = |section: &str| only.map(|o| o == section).unwrap_or(true);
    if want("completed") {
        println!("completed ({}):", rep.completed.len());
        println!(
            "  {:<10} {:<8} {:>8} {:>10} {:<8}  {}",
            "pid", "start", "end", "duration", "severity", "description"
        );
        for c in &rep.completed {
            println!(
                "  {:<10} {:<8} {:>8} {:>9}s {:<8}  {}",
                c.pid, c.start_time, c.end_time, c.duration_seconds, c.severity, c.description
            );
        }
    }
    if want("orphans") {
        println!("orphan ends ({}):", rep.orphans.len());
        for o in &rep.orphans {
            println!("  {:<10} {:<8}  {}", o.pid, o.end_time, o.description);
        }
    }
    if want("incompletes") {
        println!("incomplete starts ({}):", rep.incompletes.len());
        for i in &rep.incompletes {
            println!("  {:<10} {:<8}  {}", i.pid, i.start_time, i.description);
        }
    }
    if want("entries") {
        println!("entries ({}):", rep.entries.len());
        for e in &rep.entries {
            println!(
                "  {:<8} {:<10} {:<5}  {}",
                e.time,
                e.pid,
                status_label(e.status),
                e.description
            );
        }
    }
    if only.is_none() {
        let worst = rep
            .completed
            .iter()
            .map(|c| c.severity)
            .max()
            .unwrap_or(Severity::Ok);
        println!("worst severity: {worst}");
    }
}

fn status_label(status: extract::Status) -> &'static str {
    match status {
        extract::Status::Start => "START",
        extract::Status::End => "END",
    }
}
