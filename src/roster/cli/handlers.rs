use super::menu::{confirm, Menu};
use super::print::{print_full_students, print_messages, print_students};
use super::setup::{setup_logging, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdMessage, MessageLevel, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::{Student, StudentUpdate};
use roster::store::fs_backend::FsBackend;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: RosterApi<FsBackend>,
    home: PathBuf,
    /// Set when `--file`/`ROSTER_FILE` bypasses the config
    explicit_file: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            id,
            name,
            age,
            grade,
            email,
        }) => handle_add(&mut ctx, Student::new(id, name, age, grade, email)),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Search { text }) => handle_search(&ctx, &text),
        Some(Commands::Update {
            id,
            name,
            age,
            grade,
            email,
        }) => handle_update(
            &mut ctx,
            id,
            StudentUpdate {
                name,
                age,
                grade,
                email,
            },
        ),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Count) => handle_count(&ctx),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = if cli.global {
        ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| RosterError::Store("Could not determine data dir".to_string()))?
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    };

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => RosterConfig::load(&home)?.data_path(&home),
    };
    tracing::debug!("Using roster file {}", path.display());

    Ok(AppContext {
        api: RosterApi::new(FsBackend::new(path)),
        home,
        explicit_file: cli.file.is_some(),
    })
}

/// Subcommands only mention the startup load when something went wrong.
fn print_startup_problems(ctx: &AppContext) -> Result<()> {
    let problems: Vec<CmdMessage> = ctx
        .api
        .startup_messages()
        .into_iter()
        .filter(|m| m.level != MessageLevel::Info)
        .collect();
    print_messages(&mut io::stdout().lock(), &problems)?;
    Ok(())
}

fn handle_add(ctx: &mut AppContext, student: Student) -> Result<()> {
    print_startup_problems(ctx)?;
    let result = ctx.api.add_student(student)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_startup_problems(ctx)?;
    let result = ctx.api.list_students()?;
    let mut out = io::stdout().lock();
    print_students(&mut out, &result.listed)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_show(ctx: &AppContext, id: i64) -> Result<()> {
    print_startup_problems(ctx)?;
    let result = ctx.api.find_student(id)?;
    let mut out = io::stdout().lock();
    for student in &result.listed {
        writeln!(out, "{}", student)?;
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, text: &str) -> Result<()> {
    print_startup_problems(ctx)?;
    let result = ctx.api.search_students(text)?;
    let mut out = io::stdout().lock();
    print_full_students(&mut out, &result.listed)?;
    print_messages(&mut out, &result.messages)?;
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: i64, update: StudentUpdate) -> Result<()> {
    print_startup_problems(ctx)?;
    if update.is_empty() {
        return Err(RosterError::Validation(
            "nothing to update; pass --name, --age, --grade or --email".to_string(),
        ));
    }
    let result = ctx.api.update_student(id, update)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64, skip_confirm: bool) -> Result<()> {
    print_startup_problems(ctx)?;
    let found = ctx.api.find_student(id)?;

    if !skip_confirm {
        let stdin = io::stdin();
        let mut out = io::stdout().lock();
        for student in &found.listed {
            writeln!(out, "Student to delete: {}", student)?;
        }
        if !confirm(&mut stdin.lock(), &mut out)? {
            print_messages(&mut out, &[CmdMessage::info("Deletion cancelled.")])?;
            return Ok(());
        }
    }

    let result = ctx.api.delete_student(id)?;
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_count(ctx: &AppContext) -> Result<()> {
    print_startup_problems(ctx)?;
    println!("{}", ctx.api.count());
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    print_startup_problems(ctx)?;
    let mut result = ctx.api.init()?;
    if !ctx.explicit_file && RosterConfig::init(&ctx.home)? {
        result.add_message(CmdMessage::info(format!(
            "Wrote default config to {}",
            ctx.home.join("config.json").display()
        )));
    }
    print_messages(&mut io::stdout().lock(), &result.messages)?;
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}
