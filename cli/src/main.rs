//! treemark CLI - outline inspection for line-markup text documents.
//!
//! A small demo host for the treemark library: it owns the file I/O and
//! document editing that the library itself leaves to callers.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use treemark::{change_level, extract, new_headline, MarkerSyntax};

#[derive(Parser)]
#[command(name = "treemark")]
#[command(version)]
#[command(about = "Present flat line-markup text as an outline tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline of a document
    Outline {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Marker character of the headline grammar
        #[arg(short, long, default_value_t = '!')]
        marker: char,

        /// Print the outline as JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// Prefix each tree line with its source line number
        #[arg(short, long)]
        anchors: bool,
    },

    /// Promote or demote one headline and print the updated document
    Shift {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// 1-based line number of the headline to shift
        #[arg(value_name = "LINE")]
        line: usize,

        /// Signed depth delta (e.g. 1 to demote, -1 to promote)
        #[arg(value_name = "DELTA", allow_hyphen_values = true)]
        delta: i32,

        /// Marker character of the headline grammar
        #[arg(short, long, default_value_t = '!')]
        marker: char,

        /// Write the result back to the file instead of stdout
        #[arg(short, long)]
        write: bool,
    },

    /// Print the lines to insert for a new headline at a given depth
    New {
        /// Nesting depth of the new headline (>= 1)
        #[arg(value_name = "DEPTH")]
        depth: usize,

        /// Marker character of the headline grammar
        #[arg(short, long, default_value_t = '!')]
        marker: char,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            marker,
            json,
            anchors,
        } => cmd_outline(&input, marker, json, anchors),
        Commands::Shift {
            input,
            line,
            delta,
            marker,
            write,
        } => cmd_shift(&input, line, delta, marker, write),
        Commands::New { depth, marker } => cmd_new(depth, marker),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(input: &Path, marker: char, json: bool, anchors: bool) -> Result<(), Box<dyn Error>> {
    let syntax = MarkerSyntax::new(marker)?;
    let text = fs::read_to_string(input)?;
    let lines: Vec<&str> = text.lines().collect();

    let outline = extract(&lines, &syntax);
    log::info!("{}: {} headlines", input.display(), outline.len());

    if json {
        println!("{}", outline.to_json(true)?);
        return Ok(());
    }

    for entry in outline.iter() {
        if anchors {
            let anchor = format!("{:>5}", entry.anchor);
            println!("{} {}", anchor.cyan(), entry.tree_line);
        } else {
            println!("{}", entry.tree_line);
        }
    }
    Ok(())
}

fn cmd_shift(
    input: &Path,
    line: usize,
    delta: i32,
    marker: char,
    write: bool,
) -> Result<(), Box<dyn Error>> {
    let syntax = MarkerSyntax::new(marker)?;
    let text = fs::read_to_string(input)?;

    let updated = shift_line(&text, line, delta, &syntax)?;

    if write {
        fs::write(input, &updated)?;
        println!("{} line {} by {}", "Shifted".green().bold(), line, delta);
    } else {
        print!("{updated}");
    }
    Ok(())
}

fn cmd_new(depth: usize, marker: char) -> Result<(), Box<dyn Error>> {
    let syntax = MarkerSyntax::new(marker)?;
    let head = new_headline(depth, &syntax)?;
    for line in &head.body_lines {
        println!("{line}");
    }
    Ok(())
}

/// Replace one document line with its re-leveled form, keeping every other
/// byte of the document as-is.
fn shift_line(
    text: &str,
    line_no: usize,
    delta: i32,
    syntax: &MarkerSyntax,
) -> Result<String, Box<dyn Error>> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if line_no == 0 || line_no > lines.len() {
        return Err(format!(
            "line {} is out of range (document has {} lines)",
            line_no,
            lines.len()
        )
        .into());
    }

    let changed = change_level(lines[line_no - 1], delta, syntax)?;
    lines[line_no - 1] = &changed;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_shift_line() {
        let syntax = MarkerSyntax::new('!').unwrap();
        let text = "#R! Intro\nbody\n#R!! Sub\n";

        let updated = shift_line(text, 3, 1, &syntax).unwrap();
        assert_eq!(updated, "#R! Intro\nbody\n#R!!! Sub\n");
    }

    #[test]
    fn test_shift_line_out_of_range() {
        let syntax = MarkerSyntax::new('!').unwrap();
        assert!(shift_line("#R! A", 0, 1, &syntax).is_err());
        assert!(shift_line("#R! A", 2, 1, &syntax).is_err());
    }

    #[test]
    fn test_shift_line_non_headline() {
        let syntax = MarkerSyntax::new('!').unwrap();
        assert!(shift_line("body text\n", 1, 1, &syntax).is_err());
    }

    #[test]
    fn test_cmd_shift_write_round_trip() {
        let syntax = MarkerSyntax::new('!').unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#R! Intro\n#R!! Sub\n").unwrap();

        cmd_shift(file.path(), 2, 1, '!', true).unwrap();
        let text = fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "#R! Intro\n#R!!! Sub\n");
        assert!(syntax.parse("#R!!! Sub").is_some());
    }
}
