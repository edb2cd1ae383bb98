use crate::domain::model::{CommandSpec, VersionRecord};
use crate::domain::ports::ProcessRunner;
use crate::utils::console::format_prefix;
use crate::utils::error::Result;
use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
const BUILD_DATE: &str = "[0-9]{4}-[0-9]{2}-[0-9]{2}";

/// Matches the two `--version` output shapes of a given tool.
#[derive(Debug, Clone)]
pub struct VersionParser {
    semantic: Regex,
    build: Regex,
}

impl VersionParser {
    pub fn new(tool: &str) -> Result<Self> {
        let tool = regex::escape(tool);
        let semantic = Regex::new(&format!(
            r"^{tool}\s+([0-9]+)\.([0-9]+)\.([0-9]+)(?:\s+\(\S+\s+{BUILD_DATE}\))?$"
        ))?;
        let build = Regex::new(&format!(r"^{tool}\s+(\S+)\s+\((\S+)\s+({BUILD_DATE})\)$"))?;
        Ok(Self { semantic, build })
    }

    /// Parses captured stdout. Surrounding whitespace is ignored.
    pub fn parse(&self, stdout: &[u8]) -> VersionRecord {
        let output = String::from_utf8_lossy(stdout);
        let output = output.trim();

        if let Some(caps) = self.semantic.captures(output) {
            let numbers = (
                caps[1].parse::<u64>(),
                caps[2].parse::<u64>(),
                caps[3].parse::<u64>(),
            );
            // Components too large for u64 fall through to the free-form shape.
            if let (Ok(major), Ok(minor), Ok(micro)) = numbers {
                return VersionRecord::Semantic {
                    major,
                    minor,
                    micro,
                };
            }
        }

        match self.build.captures(output) {
            Some(caps) => VersionRecord::Build {
                version: caps[1].to_string(),
                build_hash: caps[2].to_string(),
                build_date: caps[3].to_string(),
            },
            None => VersionRecord::Unparsed,
        }
    }
}

/// Runs `<tool> --version` and reports what it finds.
pub struct VersionProbe<'a, R: ProcessRunner> {
    runner: &'a R,
    tool: &'a str,
    parser: VersionParser,
}

impl<'a, R: ProcessRunner> VersionProbe<'a, R> {
    pub fn new(runner: &'a R, tool: &'a str) -> Result<Self> {
        Ok(Self {
            runner,
            tool,
            parser: VersionParser::new(tool)?,
        })
    }

    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(self.tool).arg("--version")
    }

    /// Returns `None` when the tool is missing or the version check exits
    /// non-zero. Otherwise returns the parsed record, which may be
    /// [`VersionRecord::Unparsed`].
    pub fn probe(&self) -> Option<VersionRecord> {
        let command = self.command();
        match self.runner.run(&command) {
            Ok(result) if result.success() => Some(self.parser.parse(&result.stdout)),
            Ok(result) => {
                tracing::debug!(
                    "'{}' exited with {:?}: {}",
                    command,
                    result.exit_code,
                    result.stderr_text()
                );
                None
            }
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }

    /// [`probe`](Self::probe) with progress lines.
    pub fn check(&self, prefix: Option<&str>) -> Option<VersionRecord> {
        println!("{}Checking {} version...", format_prefix(prefix), self.tool);
        match self.probe() {
            Some(record) => {
                println!("\tFound {} version", self.tool);
                println!("{}", record.render(self.tool));
                Some(record)
            }
            None => {
                println!("\tNo installations of {} found", self.tool);
                None
            }
        }
    }
}
