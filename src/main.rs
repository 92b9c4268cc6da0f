use clap::Parser;
use verbforge::cli;
use verbforge::error::ConvertResult;

#[derive(Parser)]
#[command(name = "verbforge")]
#[command(about = "Flatten verb_conjugations.xlsx into public/verb_conjugations.json")]
#[command(long_about = "Verbforge - verb-conjugation workbook to JSON converter

Reads every sheet of verb_conjugations.xlsx from the working directory,
tags each row with its series (the sheet name), merges all sheets into
one flat record set, and writes public/verb_conjugations.json.

PIPELINE:
  1. Read all worksheets in workbook order
  2. Add a 'serie' column per row (sheet name, whitespace-stripped)
  3. Concatenate rows (outer join: missing columns become null)
  4. Trim column names; rename 'correct antwoord' to 'correcte'
  5. Write pretty-printed UTF-8 JSON (non-ASCII kept literal)

Paths are fixed by contract with the front-end; there are no path
arguments. Run from the directory containing the workbook.

EXAMPLES:
  verbforge              # Convert, print the record/sheet summary
  verbforge --verbose    # Also show per-sheet row and column counts")]
#[command(version)]
struct Cli {
    /// Show per-sheet progress while converting
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ConvertResult<()> {
    let cli = Cli::parse();

    cli::convert(cli.verbose)
}
