//! Command-line interface for ogcard
//!
//! The `ogcard` binary exposes each layout step on its own (`segment`,
//! `estimate`) and the whole card (`layout`, `batch`). Argument definitions
//! live in [`cli`], one module per subcommand in [`commands`].

pub mod cli;

pub mod commands {
    pub mod batch;
    pub mod estimate;
    pub mod info;
    pub mod layout;
    pub mod segment;
}
