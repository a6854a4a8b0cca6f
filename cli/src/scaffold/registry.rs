//! # Kickoff Type Registry
//!
//! File: cli/src/scaffold/registry.rs
//!
//! ## Overview
//!
//! The closed set of project types Kickoff knows about, and for each
//! supported one the `ScaffoldDescriptor` describing how to build it:
//! which starter directory to copy from, which config files to copy, which
//! directories and seed files to create, and which packages to install.
//!
//! ## Architecture
//!
//! - `ProjectType` is an enum, so `ProjectType::descriptor` is an exhaustive
//!   `match`. Adding a type without deciding its descriptor does not compile.
//! - Descriptors are `static` data; nothing here allocates or mutates.
//! - `lookup` is the string-facing entry point. Unknown strings and types
//!   without a descriptor (`react-native`) both yield
//!   `KickoffError::NotSupported`.
//!
use crate::core::error::{KickoffError, Result};
use anyhow::anyhow;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Project types accepted on the command line (`--type`).
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    /// Browser application built with React and webpack.
    React,
    /// React Native application (accepted, not yet supported).
    ReactNative,
    /// Node.js library or service.
    Node,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::React,
        ProjectType::ReactNative,
        ProjectType::Node,
    ];

    /// Identifier as typed on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::React => "react",
            ProjectType::ReactNative => "react-native",
            ProjectType::Node => "node",
        }
    }

    /// The scaffold descriptor for this type, if the type is supported.
    pub fn descriptor(self) -> Option<&'static ScaffoldDescriptor> {
        match self {
            ProjectType::React => Some(&REACT),
            ProjectType::ReactNative => None,
            ProjectType::Node => Some(&NODE),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = KickoffError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| KickoffError::NotSupported {
                project_type: s.to_string(),
            })
    }
}

/// Everything needed to scaffold one project type.
#[derive(Debug)]
pub struct ScaffoldDescriptor {
    /// Directory name under the starter-kit root.
    pub starter_id: &'static str,
    /// `(source, destination)` pairs; source is starter-relative, destination
    /// project-relative. An empty destination keeps the source's base name at
    /// the project root.
    pub config_files: &'static [(&'static str, &'static str)],
    /// Directories created inside the project, in order.
    pub directories: &'static [&'static str],
    /// `(path, content)` pairs written verbatim.
    pub seed_files: &'static [(&'static str, &'static str)],
    /// Installed with `--save`.
    pub runtime_packages: &'static [&'static str],
    /// Installed with `--save-dev`, after the runtime packages.
    pub dev_packages: &'static [&'static str],
}

/// Resolves a `--type` value to its descriptor.
///
/// # Errors
///
/// `KickoffError::NotSupported` for unknown identifiers and for accepted
/// types that have no descriptor yet.
pub fn lookup(project_type: &str) -> Result<&'static ScaffoldDescriptor> {
    let not_supported = || {
        anyhow!(KickoffError::NotSupported {
            project_type: project_type.to_string(),
        })
    };
    let parsed: ProjectType = project_type.parse().map_err(|_| not_supported())?;
    parsed.descriptor().ok_or_else(not_supported)
}

const MAIN_JS: &str = "console.log('Hello World');\n";

const INDEX_HTML: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <title>App</title>
</head>
<body>
  <script src=\"/main.js\"></script>
</body>
</html>
";

static REACT: ScaffoldDescriptor = ScaffoldDescriptor {
    starter_id: "react-web",
    config_files: &[
        ("default.babelrc", ".babelrc"),
        ("default.eslintignore", ".eslintignore"),
        ("default.eslintrc", ".eslintrc"),
        ("default.flowconfig", ".flowconfig"),
        ("default.gitignore", ".gitignore"),
        ("flow", ""),
        ("test", ""),
        ("webpack.config.js", ""),
    ],
    directories: &["assets", "src", "node_modules"],
    seed_files: &[("src/main.js", MAIN_JS), ("assets/index.html", INDEX_HTML)],
    runtime_packages: &["react", "react-dom", "class-autobind", "classnames"],
    dev_packages: &[
        // babel (with react)
        "babel-core",
        "babel-preset-es2015",
        "babel-preset-react",
        "babel-preset-stage-2",
        "babel-plugin-transform-class-properties",
        // eslint (with react)
        "eslint",
        "babel-eslint",
        "eslint-plugin-babel",
        "eslint-plugin-flow-vars",
        "eslint-plugin-react",
        // flow
        "flow-bin",
        // webpack
        "webpack",
        "webpack-dev-server",
        "babel-loader",
        "css-loader",
        "css-modules-require-hook",
        "raw-loader",
        "style-loader",
        // testing
        "mocha",
        "expect",
        "enzyme",
        "react-addons-test-utils",
    ],
};

static NODE: ScaffoldDescriptor = ScaffoldDescriptor {
    starter_id: "node",
    config_files: &[
        ("default.babelrc", ".babelrc"),
        ("default.eslintignore", ".eslintignore"),
        ("default.eslintrc", ".eslintrc"),
        ("default.flowconfig", ".flowconfig"),
        ("default.gitignore", ".gitignore"),
        ("default.npmignore", ".npmignore"),
        ("test", ""),
    ],
    directories: &["lib", "src", "node_modules"],
    seed_files: &[("src/main.js", MAIN_JS)],
    // promise helpers
    runtime_packages: &["denodeify"],
    dev_packages: &[
        // babel (without react)
        "babel-core",
        "babel-preset-es2015-native-generators",
        "babel-preset-stage-2",
        "babel-plugin-transform-class-properties",
        "babel-plugin-transform-flow-strip-types",
        "babel-plugin-syntax-flow",
        // eslint (without react)
        "eslint",
        "babel-eslint",
        "eslint-plugin-babel",
        "eslint-plugin-flow-vars",
        // flow
        "flow-bin",
        // testing
        "mocha",
        "expect",
    ],
};
