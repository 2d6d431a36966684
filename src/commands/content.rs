//! Dump the resolved page content

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::content::{Content, loader};

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let content = loader::resolve(config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&content)?),
        OutputFormat::Text => print_text(&content),
    }

    Ok(())
}

fn print_text(content: &Content) {
    let profile = &content.profile;
    println!("{} {}", profile.name.bold(), format!("({})", profile.location).dimmed());
    println!("  {}", profile.tagline);
    for link in &profile.links {
        println!("  {} {}", link.label.cyan(), link.href);
    }
    println!();

    println!("{}", "skills".cyan());
    for group in &content.skill_groups {
        println!("  {}: {}", group.title, group.skills.join(", "));
    }
    println!();

    println!("{}", "projects".cyan());
    for project in &content.projects {
        println!("  {} [{}]", project.name.bold(), project.tech.join(", "));
    }
    println!();

    println!("{}", "experience".cyan());
    for job in &content.experience {
        println!("  {} {} {}", job.title.bold(), "@".dimmed(), job.company);
    }
}
