// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be spelled with a single dash (`-kubeconfig`)
const SINGLE_DASH_FLAGS: [&str; 2] = ["kubeconfig", "namespace"];

/// Create the api server deployment, its services and ingress in a cluster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Absolute path to the kubeconfig file [default: $HOME/.kube/config]
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Namespace to create the resources in
    #[arg(short = 'n', long, default_value = crate::constants::DEFAULT_NAMESPACE)]
    pub namespace: String,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-kubeconfig` style flags into the `--kubeconfig` form clap expects.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let flag = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&flag) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_single_dash_flag() {
        let normalized = normalize_args(args(&["prog", "-kubeconfig", "/tmp/config"]));
        assert_eq!(normalized, args(&["prog", "--kubeconfig", "/tmp/config"]));
    }

    #[test]
    fn test_normalize_single_dash_flag_with_value() {
        let normalized = normalize_args(args(&["prog", "-kubeconfig=/tmp/config"]));
        assert_eq!(normalized, args(&["prog", "--kubeconfig=/tmp/config"]));
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let input = args(&["prog", "--kubeconfig", "/tmp/config", "-n", "apps", "-h"]);
        assert_eq!(normalize_args(input.clone()), input);
    }

    #[test]
    fn test_parse_go_style_flags() {
        let cli = Cli::parse_from(normalize_args(args(&[
            "prog",
            "-kubeconfig",
            "/etc/kube/config",
            "-namespace=staging",
        ])));
        assert_eq!(cli.kubeconfig, Some(PathBuf::from("/etc/kube/config")));
        assert_eq!(cli.namespace, "staging");
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(args(&["prog"]));
        assert_eq!(cli.kubeconfig, None);
        assert_eq!(cli.namespace, "default");
    }
}
