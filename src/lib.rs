//! Browser view layer for a remote tic-tac-toe service.
//!
//! The game itself (move validation, win detection, the computer opponent)
//! lives behind three HTTP endpoints. This crate mirrors whatever state those
//! endpoints return into the page, and owns the purely cosmetic state: sound
//! and music mutes, the about modal and the confetti burst on a win.
//!
//! ## Modules
//!
//! - [`board`]: marks, cell indices and the 3x3 grid
//! - [`dto`]: JSON bodies exchanged with the move service
//! - [`api`]: endpoint paths and the [`api::Api`] seam
//! - [`controller`]: local mirror of server state, drives the page
//! - [`dom`]: `web-sys` bindings (feature `client`)
//! - [`hosting`]: static page server (feature `server`)
pub mod api;
pub mod audio;
pub mod board;
pub mod confetti;
pub mod controller;
pub mod dto;
pub mod modal;
pub mod score;
pub mod screen;
pub mod status;

#[cfg(feature = "client")]
pub mod dom;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// ENDPOINTS
// ============================================================================
/// Prefix shared by every move-service route.
pub const API_PREFIX: &str = "/api";
/// Submit a player move, receive the board after the computer replies.
pub const API_MOVE: &str = const_format::concatcp!(API_PREFIX, "/move");
/// Clear the board, keep the tally.
pub const API_RESET: &str = const_format::concatcp!(API_PREFIX, "/reset");
/// Zero the tally.
pub const API_RESET_SCORES: &str = const_format::concatcp!(API_PREFIX, "/reset_scores");

// ============================================================================
// STATUS TEXT
// Server-authored. Only the player win is acted on client-side.
// ============================================================================
pub const STATUS_TURN: &str = "Player X's turn.";
pub const STATUS_PLAYER_WINS: &str = "Player X wins! Please Reset Game.";
pub const STATUS_AI_WINS: &str = "Player O (AI) wins! Please Reset Game.";
pub const STATUS_DRAW: &str = "Game is a draw! Please Reset Game.";

// ============================================================================
// CONFETTI
// ============================================================================
pub const CONFETTI_PARTICLES: u32 = 100;
pub const CONFETTI_SPREAD: u32 = 70;
/// Vertical launch point as a fraction of viewport height.
pub const CONFETTI_ORIGIN_Y: f64 = 0.6;

// ============================================================================
// PAGE ELEMENTS
// ============================================================================
pub const ID_BOARD: &str = "game-board";
pub const ID_STATUS: &str = "game-status";
pub const ID_RESET: &str = "reset-button";
pub const ID_RESET_SCORES: &str = "reset-scores-button";
pub const ID_PLAYER_SCORE: &str = "player-score";
pub const ID_AI_SCORE: &str = "ai-score";
pub const ID_DRAW_SCORE: &str = "draw-score";
pub const ID_ABOUT: &str = "about-button";
pub const ID_ABOUT_MODAL: &str = "about-modal";
pub const ID_MUTE_SFX: &str = "mute-sfx-button";
pub const ID_MUTE_MUSIC: &str = "mute-music-button";
pub const ID_CLICK_SOUND: &str = "clickSound";
pub const ID_WIN_SOUND: &str = "winSound";
pub const ID_MUSIC: &str = "bgMusic";
pub const SEL_MODAL_CLOSE: &str = ".modal-close-button";
pub const SEL_SFX_SLASH: &str = ".sfx-slash";
pub const SEL_MUSIC_SLASH: &str = ".music-slash";
/// Class that hides icons and the modal.
pub const CLASS_HIDDEN: &str = "hidden";
/// Base classes for every grid cell.
pub const CLASS_CELL: &str = "board-cell flex items-center justify-center text-5xl font-bold rounded-lg";
/// Entry animation for occupied cells.
pub const CLASS_POP_IN: &str = "animate-pop-in";
/// Attribute carrying the cell index for click delegation.
pub const ATTR_INDEX: &str = "data-index";
/// Optional `<body>` attribute overriding the API base URL.
pub const ATTR_API_BASE: &str = "data-api-base";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Terminal at INFO, plus a per-run file under `logs/` at DEBUG.
/// Only this crate and the actix access log get through; the HTTP
/// client and server internals are too chatty for a page host.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .add_filter_allow_str("actix_web::middleware::logger")
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = std::fs::File::create(format!("logs/hosting-{}.log", stamp))?;
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

/// Route `log` records to the browser console and panics to `console.error`.
#[cfg(feature = "client")]
pub fn console() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
