// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::bucket::DEFAULT_DEPTH;

#[derive(Parser)]
#[command(
    name = "talpa",
    version,
    about = "Enhanced suffix array index for nucleotide sequences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a plain-text sequence file and save it
    Index {
        /// Sequence file; whitespace is ignored and case is folded
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the index
        #[arg(short, long)]
        output: PathBuf,
        /// Bucket table depth (1..=21)
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        bucket_depth: usize,
    },
    /// Search a saved index for an exact pattern
    Search {
        /// Saved index file
        file: PathBuf,
        /// Pattern to search for
        pattern: String,
        /// Also search the reverse complement of the pattern
        #[arg(long)]
        both_strands: bool,
        /// Emit matches as JSON instead of tab-separated text
        #[arg(long)]
        json: bool,
        /// Print at most this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print header fields and section sizes of a saved index
    Inspect {
        /// Saved index file
        file: PathBuf,
    },
}
