use crate::conf::{ConfigError, load_or_default};
use miette::Report;
use std::path::Path;

pub fn check(path: Option<&Path>, plain: bool) -> anyhow::Result<()> {
    let result = load_or_default(path).and_then(|cfg| {
        let sources = cfg.resolve_sources()?;
        Ok((cfg, sources))
    });

    match result {
        Ok((cfg, sources)) => {
            println!("✔ Config loaded successfully");
            println!("✔ data root {}", cfg.data_root.display());
            println!("✔ {} sources: {}", sources.len(), sources.join(", "));
            println!(
                "✔ variants: {} ({}), {} ({})",
                cfg.variants.enabled.label,
                cfg.variants.enabled.file,
                cfg.variants.disabled.label,
                cfg.variants.disabled.file
            );
            println!(
                "✔ export {}x{} into {}",
                cfg.export.width,
                cfg.export.height,
                cfg.export.output_dir.display()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    eprint!("{}", render_config_error(err, plain));
}

/// The error as `config check` prints it, followed by a hint when one exists.
pub fn render_config_error(err: ConfigError, plain: bool) -> String {
    let hint = config_error_hint(&err);

    let mut out = if plain {
        format!("{}\n", err)
    } else {
        format!("\n{:?}\n", Report::new(err))
    };

    if let Some(hint) = hint {
        out.push('\n');
        out.push_str(hint);
        out.push('\n');
    }
    out
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NoSources { .. } => Some(
            "Either list the machines explicitly or point the discovery glob at them.\n\
             \n\
             Example:\n\
             \n\
             data_root = \"data\"\n\
             sources   = [\"machine1\", \"machine2\"]",
        ),

        ConfigError::DuplicateLabel { .. } => Some(
            "Both variants are drawn on the same chart and need distinct labels.\n\
             \n\
             Example:\n\
             \n\
             variants = {\n\
             \x20 enabled  = { file = \"result_with_tpm.txt\", label = \"Com TPM\" }\n\
             \x20 disabled = { file = \"result_without_tpm.txt\", label = \"Sem TPM\" }\n\
             }",
        ),

        ConfigError::InvalidExportSize { .. } => Some(
            "Export width and height are pixels, each between 1 and 8192.",
        ),

        ConfigError::Parse { .. } => Some(
            "Nested settings are written as attribute objects:\n\
             \n\
             export = {\n\
             \x20 width  = 1200\n\
             \x20 height = 400\n\
             }",
        ),

        _ => None,
    }
}
