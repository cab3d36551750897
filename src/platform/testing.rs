//! Scripted command runner for unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use super::CommandRunner;
use crate::error::{KibanaError, KibanaResult};

/// Replays canned output keyed by the full argument list and records every call
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    responses: HashMap<Vec<String>, Vec<String>>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, args: &[&str], output: &str) -> Self {
        let key = args.iter().map(|a| a.to_string()).collect();
        let lines = output.lines().map(str::to_string).collect();
        self.responses.insert(key, lines);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>> {
        let key: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.calls.borrow_mut().push(key.clone());
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| KibanaError::command_failed(key.join(" "), "no scripted response"))
    }
}
