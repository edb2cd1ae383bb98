#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use venv_bootstrap::core::{CommandResult, CommandSpec, ProcessRunner};
use venv_bootstrap::{BootstrapError, Result};

#[derive(Debug, Clone)]
pub enum Reply {
    Exit { code: i32, stdout: String, stderr: String },
    StartFailure,
}

impl Reply {
    pub fn ok(stdout: &str) -> Self {
        Reply::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn fail(code: i32, stderr: &str) -> Self {
        Reply::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

struct Rule {
    prefix: String,
    replies: VecDeque<Reply>,
}

/// Fake runner answering by command-line prefix. Each rule hands out its
/// replies in order and keeps repeating the last one.
pub struct ScriptedRunner {
    rules: RefCell<Vec<Rule>>,
    hook: Option<Box<dyn Fn(&CommandSpec)>>,
    calls: RefCell<Vec<String>>,
    commands: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            rules: RefCell::new(Vec::new()),
            hook: None,
            calls: RefCell::new(Vec::new()),
            commands: RefCell::new(Vec::new()),
        }
    }

    pub fn on<I: IntoIterator<Item = Reply>>(self, prefix: &str, replies: I) -> Self {
        self.rules.borrow_mut().push(Rule {
            prefix: prefix.to_string(),
            replies: replies.into_iter().collect(),
        });
        self
    }

    /// Runs before the reply is produced, unless the reply is a start failure.
    pub fn with_hook(mut self, hook: impl Fn(&CommandSpec) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult> {
        let line = command.to_string();
        self.calls.borrow_mut().push(line.clone());
        self.commands.borrow_mut().push(command.clone());

        let reply = {
            let mut rules = self.rules.borrow_mut();
            match rules.iter_mut().find(|rule| line.starts_with(&rule.prefix)) {
                Some(rule) if rule.replies.len() > 1 => rule.replies.pop_front(),
                Some(rule) => rule.replies.front().cloned(),
                None => None,
            }
        }
        .unwrap_or(Reply::StartFailure);

        match reply {
            Reply::StartFailure => Err(BootstrapError::ProcessStart {
                program: command.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "scripted start failure"),
            }),
            Reply::Exit {
                code,
                stdout,
                stderr,
            } => {
                if let Some(hook) = &self.hook {
                    hook(command);
                }
                Ok(CommandResult {
                    exit_code: Some(code),
                    stdout: stdout.into_bytes(),
                    stderr: stderr.into_bytes(),
                })
            }
        }
    }
}

/// Hook that materialises `uv venv ... PATH` on disk.
pub fn create_venv_dir(command: &CommandSpec) {
    if command.args.first().map(String::as_str) == Some("venv") {
        if let Some(path) = command.args.last() {
            std::fs::create_dir_all(std::path::Path::new(path).join("bin")).unwrap();
        }
    }
}
