use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::edit;
use crate::import;
use crate::presets;
use crate::profile::BrandProfile;
use crate::skill::{self, DocumentType};
use crate::store::ProfileStore;
use crate::summary;

pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let store_path = cli.store.as_deref().unwrap_or(config.store_path.as_path());
    let mut store = ProfileStore::load(store_path)
        .with_context(|| format!("Failed to load profile store: {}", store_path.display()))?;

    match &cli.command {
        Command::New { name, preset } => {
            let profile = match preset {
                Some(key) => BrandProfile::from_preset(key, name.as_deref()).ok_or_else(|| {
                    anyhow!(
                        "Unknown preset '{}' (expected one of: {})",
                        key,
                        presets::PRESET_KEYS.join(", ")
                    )
                })?,
                None => BrandProfile::new(name.as_deref().unwrap_or("New Brand")),
            };
            let id = profile.id.clone();
            store.save(profile)?;
            store.set_active(Some(id.as_str()))?;
            store.persist()?;
            println!("{}", id);
        }
        Command::List => {
            let active = store.active_id();
            for profile in store.list() {
                let marker = if Some(profile.id.as_str()) == active { "*" } else { " " };
                println!("{} {}  {}", marker, profile.id, profile.name);
            }
        }
        Command::Show { id } => {
            let profile = resolve_profile(&store, id.as_deref())?;
            println!("{}", store.export(&profile.id)?);
        }
        Command::Use { id } => {
            store.set_active(Some(id.as_str()))?;
            store.persist()?;
        }
        Command::Delete { id } => {
            let removed = store.delete(id)?;
            store.persist()?;
            eprintln!("Deleted {}", removed.name);
        }
        Command::Duplicate { id } => {
            let copy = store.duplicate(id)?;
            store.persist()?;
            println!("{}", copy.id);
        }
        Command::Export { id, output } => {
            let json = store.export(id)?;
            match output {
                Some(path) => write_file(path, &json)?,
                None => println!("{}", json),
            }
        }
        Command::Set { profile, field } => {
            let mut target = resolve_profile(&store, profile.as_deref())?.clone();
            edit::apply_edit(&mut target, field);
            let id = target.id.clone();
            store
                .save(target)
                .with_context(|| format!("Profile {} was not changed", id))?;
            store.persist()?;
        }
        Command::Logo {
            file,
            profile,
            position,
            size,
            remove,
        } => {
            let mut target = resolve_profile(&store, profile.as_deref())?.clone();
            if *remove {
                edit::remove_logo(&mut target.logo);
            }
            if let Some(path) = file {
                edit::attach_logo(&mut target.logo, path)?;
            }
            if let Some(position) = position {
                target.logo.position = *position;
            }
            if let Some(size) = size {
                target.logo.size = *size;
            }
            store.save(target)?;
            store.persist()?;
        }
        Command::Import { file } => {
            let json = fs::read_to_string(file)
                .with_context(|| format!("Failed to read profile JSON: {}", file.display()))?;
            let profile = store.import(&json)?;
            store.persist()?;
            println!("{}", profile.id);
        }
        Command::Presets => {
            for preset in presets::all() {
                println!("{:<10} {:<10} {}", preset.key, preset.name, preset.description);
            }
        }
        Command::Extract {
            document,
            json,
            html,
        } => {
            let extracted = import::extract_document(document)
                .with_context(|| format!("Error parsing document: {}", document.display()))?;
            if *html {
                println!("{}", extracted.raw_html);
            }
            if *json {
                println!("{}", serde_json::to_string_pretty(&extracted)?);
            } else {
                println!("Extracted: {}", summary::summarize(&extracted).join(", "));
            }
        }
        Command::ApplyTemplate { document, profile } => {
            let current = resolve_profile(&store, profile.as_deref())?.clone();
            let result = import::import_template(document, &current)
                .with_context(|| format!("Error parsing document: {}", document.display()))?;
            debug!(
                colors = ?result.extracted.colors,
                typography = ?result.extracted.typography,
                "extracted template styles"
            );
            store.save(result.profile)?;
            store.persist()?;
            println!("Extracted: {}", result.summary.join(", "));
        }
        Command::Skill {
            profile,
            doc_type,
            all,
            output,
        } => {
            let profile = resolve_profile(&store, profile.as_deref())?;
            let out_dir = output.as_deref().unwrap_or(config.skills_dir.as_path());
            let skills = if *all {
                skill::generate_all(profile)
            } else {
                vec![(*doc_type, skill::generate_skill(profile, *doc_type))]
            };
            write_skills(out_dir, &profile.name, &skills)?;
        }
    }

    Ok(())
}

/// The named profile, or the active one when no id is given.
fn resolve_profile<'a>(store: &'a ProfileStore, id: Option<&str>) -> Result<&'a BrandProfile> {
    match id {
        Some(id) => store
            .get(id)
            .ok_or_else(|| anyhow!("Profile not found: {}", id)),
        None => match store.active() {
            Some(profile) => Ok(profile),
            None => bail!("No active profile. Create one with `brandkit new` or pick one with `brandkit use`."),
        },
    }
}

fn write_skills(out_dir: &Path, profile_name: &str, skills: &[(DocumentType, String)]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    for (doc_type, content) in skills {
        let path = out_dir.join(skill::skill_filename(profile_name, *doc_type));
        write_file(&path, content)?;
        info!(path = %path.display(), "wrote skill");
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
