//! Command line value object

use std::ffi::{OsStr, OsString};

/// Program and arguments of an external process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<OsString>,
}

impl CommandLine {
    /// Start a command line with the program name
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            argv: vec![program.into()],
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.argv.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Arguments after the program name
    pub fn arguments(&self) -> &[OsString] {
        &self.argv[1..]
    }

    /// Lossy string form of every element, for logs and assertions
    pub fn to_strings(&self) -> Vec<String> {
        self.argv
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

/// Shell-quoted rendering, as echoed in trace mode
impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for arg in &self.argv {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            let arg = arg.to_string_lossy();
            match shlex::try_quote(&arg) {
                Ok(quoted) => f.write_str(&quoted)?,
                Err(_) => write!(f, "{:?}", arg)?,
            }
        }
        Ok(())
    }
}
