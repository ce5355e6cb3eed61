use std::path::PathBuf;

use crate::core::Ticks;
use crate::error::SimError;
use crate::policy::Discipline;

pub const USAGE: &str = "usage: ticksched -s <FCFS|SPN|SRT|HRRN|RR|FB> [-q <quantum>] <input> <output>";

#[derive(Debug, Clone)]
pub struct Config {
    pub discipline: Discipline,
    pub quantum: Option<Ticks>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    // Flags may appear anywhere; the two bare arguments are the input and
    // output paths, in that order
    pub fn parse<I>(args: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut discipline = None;
        let mut quantum = None;
        let mut paths: Vec<PathBuf> = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-s" | "--scheduler" => {
                    let value = args
                        .next()
                        .ok_or(SimError::MissingOptionValue("--scheduler"))?;
                    discipline = Some(value.parse()?);
                }
                "-q" | "--quantum" => {
                    let value = args
                        .next()
                        .ok_or(SimError::MissingOptionValue("--quantum"))?;
                    let parsed: Ticks = value
                        .parse()
                        .map_err(|_| SimError::InvalidQuantum(value.clone()))?;
                    quantum = Some(parsed);
                }
                _ if arg.starts_with('-') => return Err(SimError::UnexpectedArgument(arg)),
                _ => paths.push(PathBuf::from(arg)),
            }
        }

        let discipline = discipline.ok_or(SimError::MissingArgument("scheduler type"))?;
        if paths.len() > 2 {
            return Err(SimError::UnexpectedArgument(
                paths[2].display().to_string(),
            ));
        }
        let output = paths.pop().ok_or(SimError::MissingArgument("output path"))?;
        let input = paths.pop().ok_or(SimError::MissingArgument("input path"))?;

        Ok(Self {
            discipline,
            quantum,
            input,
            output,
        })
    }
}
