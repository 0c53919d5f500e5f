//! A little tool to print every pattern occurrence in some text.
//!
//! Patterns are given as arguments and the text is read from stdin. Each
//! match is printed as `<pattern> <start>:<end>`. Without arguments a small
//! demo pattern set is searched in a demo text.
//!
//! ```sh
//! echo "ushers" | cargo run -p scan -- he she his hers
//! RUST_LOG=acscan=trace cargo run -p scan
//! ```

use std::env;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};

const DEMO_PATTERNS: &[&str] = &["a", "ab", "bab", "bc", "bca", "c", "caa"];
const DEMO_TEXT: &str = "abccab";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (patterns, text) = if args.is_empty() {
        let patterns: Vec<String> = DEMO_PATTERNS.iter().map(|&p| p.to_owned()).collect();
        (patterns, DEMO_TEXT.as_bytes().to_vec())
    } else {
        let mut text = Vec::new();
        io::stdin()
            .read_to_end(&mut text)
            .context("failed to read text from stdin")?;
        (args, text)
    };

    log::info!("searching {} bytes for {:?}", text.len(), patterns);
    let ac = acscan::Automaton::new(&patterns);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for m in ac.find_overlapping_iter(&text) {
        writeln!(out, "{} {}:{}", patterns[m.pattern_id()], m.start(), m.end())?;
    }
    out.flush()?;
    Ok(())
}
