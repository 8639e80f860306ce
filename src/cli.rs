//! Command line.

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Overrides;
use crate::sorting::{Algorithm, ArraySampler, Frame, SortTrace, DEFAULT_LENGTH, MAX_LENGTH};
use crate::ui::Page;

#[derive(Parser, Debug)]
#[command(name = "dsa-arcade", version, about = "Data structures and algorithms in the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page to open first
    #[arg(long, value_enum, default_value_t = Page::Home)]
    pub page: Page,

    /// Seed for generated arrays (default: clock)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    pub mute: bool,

    /// Write logs here instead of the configured file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Sorting frame delay in milliseconds
    #[arg(long, value_parser = RangedU64ValueParser::<u64>::new().range(50..=2000))]
    pub delay: Option<u64>,

    /// Sorting array length
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(5..=18))]
    pub length: Option<usize>,

    /// Hanoi disk count
    #[arg(long, value_parser = RangedU64ValueParser::<u8>::new().range(3..=5))]
    pub disks: Option<u8>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort an array and print the recorded trace as JSON
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    #[arg(long, value_enum)]
    pub algorithm: Algorithm,

    /// Length of a generated array
    #[arg(
        long,
        conflicts_with = "values",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_LENGTH as u64)
    )]
    pub length: Option<usize>,

    /// Explicit input, comma separated (at most 18 numbers)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub values: Option<Vec<u32>>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Include every frame, not just the counts
    #[arg(long)]
    pub frames: bool,
}

/// Trace input the command line accepted but the recorder will not take.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("--values takes at most {max} numbers, got {count}")]
    TooManyValues { count: usize, max: usize },
}

impl Cli {
    /// Flags that override config file values.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mute: self.mute,
            delay_ms: self.delay,
            array_length: self.length,
            disks: self.disks,
            log_file: self.log_file.clone(),
        }
    }

    pub fn sampler(&self) -> ArraySampler {
        sampler(self.seed)
    }
}

fn sampler(seed: Option<u64>) -> ArraySampler {
    seed.map_or_else(ArraySampler::from_clock, ArraySampler::seeded)
}

/// What `dsa-arcade trace` prints.
#[derive(Debug, Serialize)]
pub struct TraceReport {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub input: Vec<u32>,
    pub output: Vec<u32>,
    pub comparisons: usize,
    pub writes: usize,
    pub frame_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<Frame<u32>>>,
}

impl TraceReport {
    pub fn new(trace: SortTrace<u32>, with_frames: bool) -> Self {
        Self {
            algorithm: trace.algorithm,
            name: trace.algorithm.name(),
            frame_count: trace.frames.len(),
            input: trace.input,
            output: trace.output,
            comparisons: trace.comparisons,
            writes: trace.writes,
            frames: with_frames.then_some(trace.frames),
        }
    }
}

impl TraceArgs {
    /// Every frame holds a copy of the array, so input is capped at the
    /// sorting page's largest array.
    pub fn input(&self) -> Result<Vec<u32>, TraceError> {
        match &self.values {
            Some(values) if values.len() > MAX_LENGTH => Err(TraceError::TooManyValues {
                count: values.len(),
                max: MAX_LENGTH,
            }),
            Some(values) => Ok(values.clone()),
            None => Ok(sampler(self.seed).sample(self.length.unwrap_or(DEFAULT_LENGTH))),
        }
    }

    pub fn report(&self) -> Result<TraceReport, TraceError> {
        let trace = self.algorithm.trace(&self.input()?);
        tracing::debug!(
            algorithm = %self.algorithm,
            comparisons = trace.comparisons,
            frames = trace.frames.len(),
            "trace recorded"
        );
        Ok(TraceReport::new(trace, self.frames))
    }
}
