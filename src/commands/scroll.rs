//! Simulate scrolling through the page
//!
//! Lays the sections out, sweeps a viewport from top to bottom, and prints
//! the moment each section's reveal fires.

use colored::*;
use eyre::Result;
use serde::Serialize;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::content::loader;
use crate::page::{self, Page, layout};
use crate::reveal::viewport::{MIN_STEP_PX, RevealEvent, Scroller};
use crate::reveal::{ObserverSupport, Transition};

#[derive(Serialize)]
struct BlockFrame {
    block: String,
    opacity: f64,
    offset_px: f64,
}

#[derive(Serialize)]
struct ScrollReport {
    viewport: f64,
    step: f64,
    observer: bool,
    events: Vec<RevealEvent>,
    /// Each section's frame when the sweep ends
    end_frames: Vec<BlockFrame>,
    settle_ms: u64,
    all_visible: bool,
}

fn check_dimensions(viewport: f64, step: f64) -> Result<()> {
    if !viewport.is_finite() || viewport <= 0.0 {
        eyre::bail!("Viewport height must be positive, got {}", viewport);
    }
    if !step.is_finite() || step < MIN_STEP_PX {
        eyre::bail!("Scroll step must be at least {}px, got {}", MIN_STEP_PX, step);
    }
    Ok(())
}

pub fn run(viewport: f64, step: f64, tick: u64, no_observer: bool, format: OutputFormat, config: &Config) -> Result<()> {
    check_dimensions(viewport, step)?;

    let content = loader::resolve(config)?;
    let page = Page::build(&content, page::current_year());
    let support = if no_observer {
        ObserverSupport::Unavailable
    } else {
        ObserverSupport::Available
    };

    let mut scroller = Scroller::new(layout::section_extents(&page), viewport, &config.reveal, support);
    let events = scroller.sweep(step, Duration::from_millis(tick));
    let end_frames = scroller
        .frames(scroller.clock())
        .into_iter()
        .map(|(block, frame)| BlockFrame {
            block,
            opacity: frame.opacity,
            offset_px: frame.offset_px,
        })
        .collect();
    let report = ScrollReport {
        viewport,
        step,
        observer: !no_observer,
        all_visible: scroller.all_visible(),
        settle_ms: Transition::block(&config.reveal).total().as_millis() as u64,
        end_frames,
        events,
    };
    log::info!("Scroll simulation fired {} reveal(s)", report.events.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => print_text(&report),
    }
    Ok(())
}

fn print_text(report: &ScrollReport) {
    println!("{}", "Scroll reveal".bold());
    println!("{}", "═".repeat(40));

    if !report.observer {
        println!("{} No intersection observer, every section shown on mount", "⚠".yellow());
    }

    for event in &report.events {
        println!(
            "{} {:<12} scroll {:>6.0}px  ratio {:.2}  t={}ms  settled t={}ms",
            "✓".green(),
            event.block.cyan(),
            event.scroll_y,
            event.ratio,
            event.at_ms,
            event.at_ms + report.settle_ms
        );
    }

    println!();
    println!("{}", "At end of sweep:".bold());
    for frame in &report.end_frames {
        println!(
            "  {:<12} opacity {:.2}  offset {:.1}px",
            frame.block, frame.opacity, frame.offset_px
        );
    }

    println!();
    if report.all_visible {
        println!("{} All sections visible", "✓".green());
    } else {
        println!("{} Some sections never revealed", "✗".red());
    }
}
