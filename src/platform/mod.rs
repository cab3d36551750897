//! Host CLI Command Execution
//!
//! All platform access goes through the `cf` command line client: `cf app` for
//! the textual status block and `cf curl` for the v2 API. The [`CommandRunner`]
//! trait is the seam between the pipeline and the process that runs them.

pub mod cf;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

pub use cf::CfCli;
pub use queries::{app_env_path, app_search_path, curl_json, fetch_status};

use crate::error::KibanaResult;

/// Executes a host CLI command and captures its standard output as lines
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>> {
        (**self).run(args)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>> {
        (**self).run(args)
    }
}
