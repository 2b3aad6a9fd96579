use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::fs::File;
use std::path::PathBuf;
use tac::config::TacConfig;
use tac::error::{Result, TacError};
use tac::export;
use tac::model::{FormatValue, Formatting, ParagraphKind, Project};
use tac::store::{ProjectManager, ProjectSummary};
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    tac::logging::init("warn");

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    manager: ProjectManager,
    config: TacConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New {
            name,
            author,
            description,
        }) => handle_new(&mut ctx, &name, &author, &description),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { project }) => handle_show(&mut ctx, &project),
        Some(Commands::Add {
            project,
            kind,
            content,
        }) => handle_add(&mut ctx, &project, &kind, &content),
        Some(Commands::Edit {
            project,
            paragraph,
            content,
            format,
        }) => handle_edit(&mut ctx, &project, &paragraph, content.as_deref(), &format),
        Some(Commands::Move {
            project,
            paragraph,
            position,
        }) => handle_move(&mut ctx, &project, &paragraph, position),
        Some(Commands::Remove { project, paragraph }) => {
            handle_remove(&mut ctx, &project, &paragraph)
        }
        Some(Commands::Delete { project }) => handle_delete(&mut ctx, &project),
        Some(Commands::Duplicate { project, new_name }) => {
            handle_duplicate(&mut ctx, &project, &new_name)
        }
        Some(Commands::Stats { project }) => handle_stats(&mut ctx, &project),
        Some(Commands::Export {
            project,
            format,
            output,
        }) => handle_export(&mut ctx, &project, &format, output),
        Some(Commands::Archive { projects, output }) => handle_archive(&mut ctx, &projects, output),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("TAC_DATA_DIR").map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "biglinux", "tac")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .ok_or_else(|| TacError::Store("could not determine a data directory".to_string()))?;

    let config = TacConfig::load(&data_dir).unwrap_or_default();
    let manager = ProjectManager::new(&data_dir, &config)?;

    Ok(AppContext { manager, config })
}

fn load_or_fail(ctx: &mut AppContext, identifier: &str) -> Result<Project> {
    ctx.manager
        .load_project(identifier)
        .ok_or_else(|| TacError::ProjectNotFound(identifier.to_string()))
}

fn handle_new(ctx: &mut AppContext, name: &str, author: &str, description: &str) -> Result<()> {
    let project = ctx.manager.create_project(name, author, description)?;
    println!(
        "{}",
        format!("Project created: {} ({})", project.name, project.id).green()
    );
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 6;

fn handle_list(ctx: &AppContext) -> Result<()> {
    let summaries = ctx.manager.list_projects();
    if summaries.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    for (i, summary) in summaries.iter().enumerate() {
        print_summary_line(i + 1, summary);
    }
    Ok(())
}

fn print_summary_line(position: usize, summary: &ProjectSummary) {
    let idx_str = format!("{:>3}. ", position);
    let counts = format!(
        "{:>width$} para  {:>width$} words",
        summary.paragraph_count,
        summary.word_count,
        width = COUNT_WIDTH
    );
    let time_str = summary
        .modified_at
        .map(format_time_ago)
        .unwrap_or_else(|| format!("{:>width$}", "-", width = TIME_WIDTH));

    let fixed = idx_str.width() + counts.width() + TIME_WIDTH + 4;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let name = truncate_to_width(&summary.name, available);
    let padding = available.saturating_sub(name.width());

    println!(
        "{}{}{}  {}  {}",
        idx_str,
        name,
        " ".repeat(padding),
        counts.dimmed(),
        time_str.dimmed()
    );
}

fn handle_show(ctx: &mut AppContext, identifier: &str) -> Result<()> {
    let project = load_or_fail(ctx, identifier)?;

    println!("{}  {}", project.name.bold(), project.id.to_string().dimmed());
    if !project.metadata.author.is_empty() {
        println!("{}", format!("by {}", project.metadata.author).dimmed());
    }
    println!("--------------------------------");

    if project.paragraphs().is_empty() {
        println!("(empty project)");
        return Ok(());
    }

    for paragraph in project.paragraphs() {
        let label = kind_label(&paragraph.kind);
        println!(
            "\n{} {}",
            format!("{}.", paragraph.order + 1).yellow(),
            label.cyan()
        );
        if paragraph.kind.is_quote() {
            let quote_indent = paragraph
                .formatting
                .resolve(&ctx.config.format_defaults())
                .quote_indent;
            let pad = " ".repeat((quote_indent.max(0.0) as usize).min(16));
            for line in paragraph.content.lines() {
                println!("{}{}", pad, line.italic());
            }
        } else {
            println!("{}", paragraph.content);
        }
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, identifier: &str, kind: &str, content: &str) -> Result<()> {
    let mut project = load_or_fail(ctx, identifier)?;
    let kind = ParagraphKind::from(kind);
    let id = project.add_paragraph(kind.clone(), content, None);

    if !ctx.manager.save_project(&project) {
        return Err(TacError::Store("failed to save project".to_string()));
    }
    println!(
        "{}",
        format!(
            "Added {} paragraph to '{}' ({})",
            kind_label(&kind),
            project.name,
            id
        )
        .green()
    );
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    identifier: &str,
    selector: &str,
    content: Option<&str>,
    format_args: &[String],
) -> Result<()> {
    let mut project = load_or_fail(ctx, identifier)?;
    let id = resolve_paragraph(&project, selector)
        .ok_or_else(|| TacError::Store(format!("no paragraph matches '{}'", selector)))?;

    let patch = if format_args.is_empty() {
        None
    } else {
        Some(parse_format_patch(format_args)?)
    };

    project.update_paragraph(id, content, patch.as_ref());
    if !ctx.manager.save_project(&project) {
        return Err(TacError::Store("failed to save project".to_string()));
    }
    println!("{}", format!("Updated paragraph {}", id).green());
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    identifier: &str,
    selector: &str,
    position: usize,
) -> Result<()> {
    let mut project = load_or_fail(ctx, identifier)?;
    let id = resolve_paragraph(&project, selector)
        .ok_or_else(|| TacError::Store(format!("no paragraph matches '{}'", selector)))?;

    project.reorder_paragraph(id, position.saturating_sub(1));
    if !ctx.manager.save_project(&project) {
        return Err(TacError::Store("failed to save project".to_string()));
    }
    println!("{}", "Paragraph moved.".green());
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, identifier: &str, selector: &str) -> Result<()> {
    let mut project = load_or_fail(ctx, identifier)?;
    let Some(id) = resolve_paragraph(&project, selector) else {
        println!("{}", format!("No paragraph matches '{}'", selector).yellow());
        return Ok(());
    };

    project.remove_paragraph(id);
    if !ctx.manager.save_project(&project) {
        return Err(TacError::Store("failed to save project".to_string()));
    }
    println!("{}", "Paragraph removed.".green());
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, identifier: &str) -> Result<()> {
    if ctx.manager.delete_project(identifier) {
        println!("{}", format!("Project '{}' moved to trash.", identifier).green());
    } else {
        println!("{}", format!("Project '{}' not found.", identifier).yellow());
    }
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, identifier: &str, new_name: &str) -> Result<()> {
    match ctx.manager.duplicate_project(identifier, new_name) {
        Some(copy) => {
            println!(
                "{}",
                format!("Duplicated '{}' as '{}' ({})", identifier, copy.name, copy.id).green()
            );
            Ok(())
        }
        None => Err(TacError::ProjectNotFound(identifier.to_string())),
    }
}

fn handle_stats(ctx: &mut AppContext, identifier: &str) -> Result<()> {
    let project = load_or_fail(ctx, identifier)?;
    println!("{}", project.name.bold());
    println!("  paragraphs: {}", project.paragraph_count());
    println!("  words:      {}", project.word_count());
    println!("  characters: {}", project.character_count(true));
    println!("  characters (no spaces): {}", project.character_count(false));
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    identifier: &str,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let project = load_or_fail(ctx, identifier)?;

    let extension = match format {
        "txt" | "html" | "odt" => format,
        other => {
            return Err(TacError::Validation(format!(
                "unknown export format '{}' (expected txt, html or odt)",
                other
            )))
        }
    };
    let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.{}", project.name, extension)));

    match extension {
        "txt" => export::write_txt(&project, &path)?,
        "html" => export::write_html(&project, &path)?,
        _ => export::write_odt(&project, &path)?,
    }

    println!("{}", format!("Exported to {}", path.display()).green());
    Ok(())
}

fn handle_archive(
    ctx: &mut AppContext,
    identifiers: &[String],
    output: Option<PathBuf>,
) -> Result<()> {
    let projects: Vec<Project> = if identifiers.is_empty() {
        let summaries = ctx.manager.list_projects();
        summaries
            .iter()
            .filter_map(|s| ctx.manager.load_project(&s.id.to_string()))
            .collect()
    } else {
        let mut loaded = Vec::new();
        for identifier in identifiers {
            loaded.push(load_or_fail(ctx, identifier)?);
        }
        loaded
    };

    if projects.is_empty() {
        println!("No projects to archive.");
        return Ok(());
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("tac-{}.tar.gz", Utc::now().format("%Y%m%d_%H%M%S")))
    });
    let file = File::create(&path).map_err(TacError::Io)?;
    export::write_archive(file, &projects)?;

    println!(
        "{}",
        format!("Archived {} project(s) to {}", projects.len(), path.display()).green()
    );
    Ok(())
}

fn kind_label(kind: &ParagraphKind) -> &str {
    match kind {
        ParagraphKind::Topic => "Topic sentence",
        ParagraphKind::Argument => "Argument",
        ParagraphKind::ArgumentQuote => "Quote",
        ParagraphKind::Conclusion => "Conclusion",
        ParagraphKind::Other(s) => s,
    }
}

/// Resolve a paragraph by 1-based position or id prefix.
fn resolve_paragraph(project: &Project, selector: &str) -> Option<Uuid> {
    if let Ok(position) = selector.parse::<usize>() {
        if position >= 1 {
            return project.paragraphs().get(position - 1).map(|p| p.id);
        }
        return None;
    }
    project
        .paragraphs()
        .iter()
        .find(|p| p.id.to_string().starts_with(selector))
        .map(|p| p.id)
}

fn parse_format_patch(args: &[String]) -> Result<Formatting> {
    let mut patch = Formatting::new();
    for arg in args {
        let Some((key, raw)) = arg.split_once('=') else {
            return Err(TacError::Validation(format!(
                "invalid formatting override '{}' (expected KEY=VALUE)",
                arg
            )));
        };
        if !patch.set(key, parse_format_value(raw)) {
            return Err(TacError::Validation(format!(
                "unknown formatting key '{}'",
                key
            )));
        }
    }
    Ok(patch)
}

fn parse_format_value(raw: &str) -> FormatValue {
    if let Ok(flag) = raw.parse::<bool>() {
        return FormatValue::Flag(flag);
    }
    if let Ok(int) = raw.parse::<i64>() {
        return FormatValue::Int(int);
    }
    if let Ok(float) = raw.parse::<f64>() {
        return FormatValue::Float(float);
    }
    FormatValue::Text(raw.to_string())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
