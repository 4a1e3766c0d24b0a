//! Per-file-type transform rules.
//!
//! The rule chain is fixed and environment-independent. Order is part of
//! the contract: the consuming engine evaluates every rule whose pattern
//! matches, so tests and downstream tooling rely on the documented order.

use serde::{Deserialize, Serialize};

/// Loader identifier for inlining font files as data URLs.
pub const URL_LOADER: &str = "url-loader";
/// Loader identifier for injecting parsed stylesheets into the document.
pub const STYLE_LOADER: &str = "style-loader";
/// Loader identifier for parsing stylesheet imports.
pub const CSS_LOADER: &str = "css-loader";
/// Loader identifier for emitting media files and returning raw references.
pub const FILE_LOADER: &str = "file-loader";
/// Loader identifier for the esbuild transpile step.
pub const ESBUILD_LOADER: &str = "esbuild-loader";
/// Loader identifier for the fast-refresh instrumentation step.
pub const FAST_REFRESH_LOADER: &str = "@reel/fast-refresh/loader";

/// Browser baseline the transpile steps target.
pub const TRANSPILE_TARGET: &str = "chrome85";

/// Pattern matching font files.
pub const FONT_PATTERN: &str = r"\.(woff|woff2)$";
/// Pattern matching stylesheets (applied case-insensitively).
pub const STYLESHEET_PATTERN: &str = r"\.css$";
/// Pattern matching image, video, and audio assets.
pub const MEDIA_PATTERN: &str = r"\.(png|svg|jpg|jpeg|webp|gif|bmp|webm|mp4|mp3|wav|aac)$";
/// Pattern matching TypeScript sources.
pub const TYPED_SCRIPT_PATTERN: &str = r"\.tsx?$";
/// Pattern matching JavaScript sources.
pub const SCRIPT_PATTERN: &str = r"\.jsx?$";

/// A file-pattern matcher paired with its transform chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Which files the rule applies to.
    pub test: FileMatcher,
    /// Transform steps, in declared order.
    pub steps: Vec<LoaderStep>,
}

/// Regular-expression file matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMatcher {
    /// The pattern source, without flags.
    pub pattern: String,
    /// Match regardless of filename casing.
    pub case_insensitive: bool,
}

impl FileMatcher {
    /// Case-sensitive matcher for `pattern`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_insensitive: false,
        }
    }

    /// Switch the matcher to case-insensitive matching.
    pub fn ignore_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Compile the matcher for evaluation.
    pub fn to_regex(&self) -> Result<regex::Regex, regex::Error> {
        regex::RegexBuilder::new(&self.pattern)
            .case_insensitive(self.case_insensitive)
            .build()
    }
}

/// One step in a transform chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderStep {
    /// Loader identifier, resolved by the consuming engine.
    pub loader: String,
    /// Step configuration.
    pub options: LoaderOptions,
}

impl LoaderStep {
    /// Step with default options.
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: LoaderOptions::None,
        }
    }

    /// Step with explicit options.
    pub fn with_options(loader: impl Into<String>, options: LoaderOptions) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// Loader-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderOptions {
    /// No configuration.
    None,
    /// File-emitting loader configuration.
    FileEmit {
        /// Emit a raw reference instead of a wrapped module record.
        es_module: bool,
    },
    /// Transpile step configuration.
    Transpile {
        syntax: ScriptSyntax,
        target: String,
    },
}

/// Source syntax fed to the transpile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptSyntax {
    Tsx,
    Jsx,
}

fn transpile_step(syntax: ScriptSyntax) -> LoaderStep {
    LoaderStep::with_options(
        ESBUILD_LOADER,
        LoaderOptions::Transpile {
            syntax,
            target: TRANSPILE_TARGET.into(),
        },
    )
}

/// The fixed transform-rule chain, identical in both environments.
pub(crate) fn transform_rules() -> Vec<TransformRule> {
    // The TypeScript chain is composed from optional steps and flattened,
    // so a step can drop out without leaving a hole.
    let typed_script_steps: Vec<LoaderStep> = [
        Some(LoaderStep::new(FAST_REFRESH_LOADER)),
        Some(transpile_step(ScriptSyntax::Tsx)),
    ]
    .into_iter()
    .flatten()
    .collect();

    vec![
        TransformRule {
            test: FileMatcher::new(FONT_PATTERN),
            steps: vec![LoaderStep::new(URL_LOADER)],
        },
        TransformRule {
            test: FileMatcher::new(STYLESHEET_PATTERN).ignore_case(),
            // Declared injection-before-parsing; the engine applies steps
            // last-declared-first, so parsing still runs before injection.
            steps: vec![LoaderStep::new(STYLE_LOADER), LoaderStep::new(CSS_LOADER)],
        },
        TransformRule {
            test: FileMatcher::new(MEDIA_PATTERN),
            steps: vec![LoaderStep::with_options(
                FILE_LOADER,
                LoaderOptions::FileEmit { es_module: false },
            )],
        },
        TransformRule {
            test: FileMatcher::new(TYPED_SCRIPT_PATTERN),
            steps: typed_script_steps,
        },
        TransformRule {
            test: FileMatcher::new(SCRIPT_PATTERN),
            steps: vec![transpile_step(ScriptSyntax::Jsx)],
        },
    ]
}
