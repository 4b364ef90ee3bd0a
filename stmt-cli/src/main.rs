use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use stmt_core::{FormatSpec, InterestParams, SourceFormat, StatementTable};
use stmt_ingest::{clean, enrich, load_statement};
use stmt_report::{report_sets, total_estimated_interest, write_workbook};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "stmtgen", version, about = "Approximate-income report from bank statement exports")]
struct Cli {
    /// Statement layout of the input files
    #[arg(long, value_enum)]
    format: Format,

    /// Output workbook path (.xlsx)
    #[arg(long)]
    out: PathBuf,

    /// One or more statement files, concatenated in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// ICICI-style xlsx statement
    Icici,
    /// PNB/OBC-style xlsx statement
    Pnb,
    /// Double-quoted credit-card CSV export
    Cc,
}

impl From<Format> for SourceFormat {
    fn from(f: Format) -> SourceFormat {
        match f {
            Format::Icici => SourceFormat::Icici,
            Format::Pnb => SourceFormat::Pnb,
            Format::Cc => SourceFormat::CreditCard,
        }
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).init();

    let cli = Cli::parse();
    let spec = FormatSpec::for_format(cli.format.into());

    for path in &cli.files {
        if !path.exists() {
            bail!("input file not found: {}", path.display());
        }
    }

    // load + clean + enrich each file, then concatenate in supply order
    let mut combined = StatementTable::new(spec.format);
    for path in &cli.files {
        let raw = load_statement(path, &spec)
            .with_context(|| format!("loading {}", path.display()))?;
        let mut table =
            clean(raw, &spec).with_context(|| format!("cleaning {}", path.display()))?;
        enrich(&mut table, &spec);
        info!("{}: {} rows after cleaning", path.display(), table.len());
        combined.concat(table);
    }

    let result = report_sets(&combined, &spec);
    for (name, set) in result.iter() {
        info!("result set {name}: {} rows", set.len());
    }

    if let Some(fd) = result.get("OBC_FDInt") {
        let interest = total_estimated_interest(fd, &InterestParams::default());
        info!("estimated FD interest (approximate): {interest:.2}");
    }

    write_workbook(&cli.out, &result)
        .with_context(|| format!("writing {}", cli.out.display()))?;

    println!(
        "Wrote {} sheet(s) ({} rows total) to {}",
        result.len(),
        combined.len(),
        cli.out.display()
    );
    Ok(())
}
