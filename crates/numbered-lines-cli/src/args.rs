use anyhow::{Context, Result, bail};
use numbered_lines::Slice;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: numbered-lines [OPTIONS] [FILE...]

Reads FILEs (or stdin, also given as -) as pages, numbers their lines and
prints them.
Operations run in the order given and always keep the original numbers
unless --reset is used.

Operations:
  --grep RE               keep lines matching RE
  --exclude RE            drop lines matching RE
  --pattern NAME          keep lines matching the configured pattern NAME
  --exclude-pattern NAME  drop lines matching the configured pattern NAME
  --drop-blank            drop whitespace-only lines
  --slice START:STOP[:STEP]
                          keep a slice; negative bounds count from the end
  --reset                 renumber from zero

Output:
  --pad N                 zero-pad line numbers to N digits
  --preview               show only the head and tail of long output
  --config PATH           read configuration from PATH
  -h, --help              show this help";

/// One pipeline step as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Grep(String),
    Exclude(String),
    Pattern(String),
    ExcludePattern(String),
    DropBlank,
    Slice(Slice),
    Reset,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub steps: Vec<Step>,
    pub files: Vec<PathBuf>,
    pub pad: Option<usize>,
    pub preview: bool,
    pub config: Option<PathBuf>,
    pub help: bool,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} expects a value"))
        };

        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--grep" => parsed.steps.push(Step::Grep(value("--grep")?)),
            "--exclude" => parsed.steps.push(Step::Exclude(value("--exclude")?)),
            "--pattern" => parsed.steps.push(Step::Pattern(value("--pattern")?)),
            "--exclude-pattern" => parsed
                .steps
                .push(Step::ExcludePattern(value("--exclude-pattern")?)),
            "--drop-blank" => parsed.steps.push(Step::DropBlank),
            "--slice" => parsed.steps.push(Step::Slice(parse_slice(&value("--slice")?)?)),
            "--reset" => parsed.steps.push(Step::Reset),
            "--pad" => {
                let pad = value("--pad")?;
                parsed.pad = Some(
                    pad.parse()
                        .with_context(|| format!("invalid --pad value: {pad}"))?,
                );
            }
            "--preview" => parsed.preview = true,
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--" => parsed.files.extend(args.by_ref().map(PathBuf::from)),
            flag if flag.starts_with('-') && flag != "-" => bail!("unknown option: {flag}"),
            _ => parsed.files.push(PathBuf::from(&arg)),
        }
    }

    Ok(parsed)
}

/// Parses `START:STOP[:STEP]`, where every part may be empty.
pub fn parse_slice(spec: &str) -> Result<Slice> {
    let parts: Vec<&str> = spec.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        bail!("invalid slice {spec:?}, expected START:STOP[:STEP]");
    }

    let bound = |part: &str| -> Result<Option<isize>> {
        if part.is_empty() {
            return Ok(None);
        }
        part.parse()
            .map(Some)
            .with_context(|| format!("invalid slice bound {part:?} in {spec:?}"))
    };

    let slice = Slice::new(bound(parts[0])?, bound(parts[1])?);
    match parts.get(2).copied().map(bound).transpose()?.flatten() {
        Some(0) => bail!("slice step cannot be zero in {spec:?}"),
        Some(step) => Ok(slice.step(step)),
        None => Ok(slice),
    }
}
