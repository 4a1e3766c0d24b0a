//! Configuration assembly.
//!
//! [`assemble`] is a pure function from [`AssembleOptions`] to
//! [`BundlerConfig`]: validate, compute the environment-dependent pieces,
//! compose, then hand the whole record to the caller's override hook.
//! No I/O happens here and no state survives between invocations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::Result;
use crate::cache::cache_name;
use crate::config::{
    BundlerConfig, CachePolicy, DevServerOptions, ExperimentsOptions, LazyCompilation,
    ModuleOptions, OptimizationOptions, OutputOptions, ResolveOptions, SourceMapKind,
    StatsVerbosity,
};
use crate::environment::Environment;
use crate::options::AssembleOptions;
use crate::plugins::{BundlerPlugin, ProgressCallback, ProgressReporter};
use crate::rules::transform_rules;

/// Module identifier of the hot-reload client transport.
pub const HOT_RELOAD_CLIENT: &str = "@reel/dev-server/client";
/// Module identifier of the fast-refresh runtime.
pub const FAST_REFRESH_RUNTIME: &str = "@reel/fast-refresh/runtime";
/// Module identifier of the shim prepended to every bundle.
pub const REACT_SHIM: &str = "@reel/bundler/react-shim.js";

/// Identifier the development bundle substitutes with the input props.
pub const INPUT_PROPS_KEY: &str = "process.env.INPUT_PROPS";

const GLOBAL_OBJECT: &str = "this";
const BUNDLE_FILENAME: &str = "bundle.js";
const DEV_SERVER_STATIC_ROOT: &str = "web";

const RESOLVE_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

/// Assemble a complete bundler configuration.
///
/// Fails only on empty required parameters. The override hook, when
/// installed, runs exactly once as the final step and its return value
/// is the result verbatim.
pub fn assemble(options: AssembleOptions) -> Result<BundlerConfig> {
    options.validate()?;

    let AssembleOptions {
        entry,
        user_component,
        out_dir,
        environment,
        override_fn,
        on_progress,
        enable_caching,
        input_props,
    } = options;

    let input_props = input_props.unwrap_or_else(|| Value::Object(Map::new()));

    let cache = if enable_caching {
        CachePolicy::Filesystem {
            name: cache_name(environment, &input_props),
        }
    } else {
        CachePolicy::Disabled
    };

    let lazy_compilation = match environment {
        Environment::Development => LazyCompilation::Enabled { entries: false },
        Environment::Production => LazyCompilation::Disabled,
    };

    let config = BundlerConfig {
        mode: environment,
        optimization: OptimizationOptions {
            minimize: false,
            split_chunks: false,
        },
        experiments: ExperimentsOptions { lazy_compilation },
        cache,
        devtool: SourceMapKind::CheapModuleSourceMap,
        stats: StatsVerbosity::Verbose,
        entry: entry_chain(environment, &user_component, &entry),
        plugins: plugin_set(environment, &input_props, on_progress),
        output: Some(OutputOptions {
            global_object: GLOBAL_OBJECT.into(),
            filename: BUNDLE_FILENAME.into(),
            path: out_dir,
        }),
        dev_server: Some(DevServerOptions {
            static_root: PathBuf::from(DEV_SERVER_STATIC_ROOT),
            history_api_fallback: true,
            hot: true,
        }),
        resolve: ResolveOptions {
            extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            alias: resolve_aliases(),
        },
        module: ModuleOptions {
            rules: transform_rules(),
        },
    };

    tracing::debug!(
        mode = %config.mode,
        entries = config.entry.len(),
        plugins = config.plugins.len(),
        caching = config.cache.is_enabled(),
        "assembled bundler configuration"
    );

    Ok(match override_fn {
        Some(f) => f(config),
        None => config,
    })
}

/// The ordered entry chain. Development prepends the hot-reload client
/// and fast-refresh runtime; both environments end with the user
/// component, the shim, and the root entry.
fn entry_chain(environment: Environment, user_component: &str, entry: &str) -> Vec<String> {
    let dev_only = |specifier: &str| match environment {
        Environment::Development => Some(specifier.to_string()),
        Environment::Production => None,
    };

    [
        dev_only(HOT_RELOAD_CLIENT),
        dev_only(FAST_REFRESH_RUNTIME),
        Some(user_component.to_string()),
        Some(REACT_SHIM.to_string()),
        Some(entry.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The environment's plugin set. The two sets are mutually exclusive.
fn plugin_set(
    environment: Environment,
    input_props: &Value,
    on_progress: Option<ProgressCallback>,
) -> Vec<BundlerPlugin> {
    match environment {
        Environment::Development => vec![
            BundlerPlugin::ErrorOverlay,
            BundlerPlugin::FastRefresh,
            BundlerPlugin::HotModuleReplacement,
            BundlerPlugin::define(INPUT_PROPS_KEY, input_props.clone()),
        ],
        Environment::Production => {
            vec![BundlerPlugin::Progress(ProgressReporter::new(on_progress))]
        }
    }
}

/// Aliases pinning each runtime package to a single resolved instance.
fn resolve_aliases() -> BTreeMap<String, String> {
    [
        ("react/jsx-runtime", "react/jsx-runtime"),
        ("react", "react"),
        ("reel", "reel"),
        ("styled-components", "styled-components"),
        // Exact-match marker: bare react-native only, not subpaths.
        ("react-native$", "react-native-web"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_chain_development_order() {
        let chain = entry_chain(Environment::Development, "./src/Video.tsx", "./src/index.ts");
        assert_eq!(
            chain,
            vec![
                HOT_RELOAD_CLIENT,
                FAST_REFRESH_RUNTIME,
                "./src/Video.tsx",
                REACT_SHIM,
                "./src/index.ts",
            ]
        );
    }

    #[test]
    fn test_entry_chain_production_drops_dev_segments() {
        let chain = entry_chain(Environment::Production, "./src/Video.tsx", "./src/index.ts");
        assert_eq!(chain, vec!["./src/Video.tsx", REACT_SHIM, "./src/index.ts"]);
    }

    #[test]
    fn test_plugin_sets_are_mutually_exclusive() {
        let props = serde_json::json!({});
        let dev = plugin_set(Environment::Development, &props, None);
        let prod = plugin_set(Environment::Production, &props, None);

        assert_eq!(dev.len(), 4);
        assert!(dev.iter().all(|p| p.name() != "progress"));

        assert_eq!(prod.len(), 1);
        assert_eq!(prod[0].name(), "progress");
    }

    #[test]
    fn test_development_define_serializes_props() {
        let props = serde_json::json!({"title": "intro"});
        let dev = plugin_set(Environment::Development, &props, None);
        match &dev[3] {
            BundlerPlugin::Define { values } => {
                assert_eq!(values.get(INPUT_PROPS_KEY), Some(&props));
            }
            other => panic!("expected define plugin, got {}", other.name()),
        }
    }

    #[test]
    fn test_alias_table_contents() {
        let aliases = resolve_aliases();
        assert_eq!(aliases.len(), 5);
        assert_eq!(
            aliases.get("react-native$").map(String::as_str),
            Some("react-native-web")
        );
        assert!(aliases.contains_key("react"));
        assert!(aliases.contains_key("react/jsx-runtime"));
        assert!(aliases.contains_key("reel"));
        assert!(aliases.contains_key("styled-components"));
    }
}
