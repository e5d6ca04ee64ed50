// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;

use talpa::binary::header::{IndexFooter, IndexHeader};
use talpa::cli::{Cli, Commands};
use talpa::{search, EsaIndex, Sequence, Strand};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Index {
            input,
            output,
            bucket_depth,
        } => run_index(&input, &output, bucket_depth),
        Commands::Search {
            file,
            pattern,
            both_strands,
            json,
            limit,
        } => run_search(&file, &pattern, both_strands, json, limit),
        Commands::Inspect { file } => run_inspect(&file),
    }
}

fn run_index(input: &Path, output: &Path, bucket_depth: usize) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(input)?;
    let sequence = Sequence::from_text(&text)?;
    let symbols = sequence.len();
    let index = EsaIndex::from_sequence(sequence, bucket_depth)?;
    fs::write(output, index.to_bytes())?;
    println!("indexed {symbols} symbols -> {}", output.display());
    Ok(())
}

fn run_search(
    file: &Path,
    pattern: &str,
    both_strands: bool,
    json: bool,
    limit: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(file)?;
    let index = EsaIndex::from_bytes(&bytes)?;
    let pattern = pattern.trim().to_ascii_uppercase();
    let mut matches = search(&index, pattern.as_bytes(), both_strands)?;
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    if json {
        println!("{}", serde_json::to_string(&matches)?);
    } else {
        for m in &matches {
            let strand = match m.strand {
                Strand::Forward => '+',
                Strand::Reverse => '-',
            };
            println!("{}\t{strand}", m.offset);
        }
    }
    Ok(())
}

fn run_inspect(file: &Path) -> Result<(), Box<dyn Error>> {
    let bytes = fs::read(file)?;
    let footer = IndexFooter::read(&bytes)?;
    let header = IndexHeader::read(&bytes)?;
    let offsets = header.section_offsets();

    println!("version:       {}", header.version);
    println!("bucket depth:  {}", header.bucket_depth);
    println!("sequence:      {} symbols", header.seq_len);
    println!("rows:          {}", header.suftab_len);
    println!("crc32:         {:#010x}", footer.crc32);
    for (name, (start, end)) in [
        ("SEQUENCE", offsets.sequence),
        ("SUFTAB", offsets.suftab),
        ("LCPTAB", offsets.lcptab),
        ("CHILD.UP", offsets.child_up),
        ("CHILD.DOWN", offsets.child_down),
        ("CHILD.NEXT", offsets.child_next),
    ] {
        println!("{name:<12} {:>10} bytes at {start}", end - start);
    }
    Ok(())
}
