use crate::{AppConfig, CliError};
use clap::Args;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// The input may come from the command line or, failing that, from the
// configuration; the output always comes from the command line.
#[derive(Args, Debug)]
pub struct IOArgs {
    /// The auction definitions file ("-" implies stdin) [default: from configuration]
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: Option<PathOrStd>,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    /// The input requested on the command line, else the configured one
    pub fn input(&self, config: &AppConfig) -> PathOrStd {
        self.input
            .clone()
            .unwrap_or_else(|| PathOrStd::Path(config.input.clone()))
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    /// Read the whole source into memory
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::Path(path) if !path.exists() => Err(CliError::MissingInput(path.clone()).into()),
            Self::Path(path) => Ok(std::fs::read_to_string(path)?),
            Self::Std => Ok(std::io::read_to_string(stdin().lock())?),
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl fmt::Display for PathOrStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Std => f.write_str("<stdin>"),
        }
    }
}
