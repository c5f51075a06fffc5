use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "formz")]
#[command(about = "Command-line form builder", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the working form document
    #[arg(short, long, global = true, default_value = "formz.json")]
    pub file: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a field to the form
    #[command(alias = "a")]
    Add {
        /// Field type (see `formz types`)
        field_type: String,

        /// Label shown next to the field
        #[arg(long)]
        label: Option<String>,

        /// Placeholder text
        #[arg(long)]
        placeholder: Option<String>,

        /// Mark the field as required
        #[arg(long)]
        required: bool,

        /// Help text shown under the field
        #[arg(long)]
        help_text: Option<String>,

        /// Choice option as value=Label (repeatable, replaces defaults)
        #[arg(long = "option", value_name = "VALUE=LABEL")]
        options: Vec<String>,
    },

    /// List the fields of the form
    #[command(alias = "ls")]
    List,

    /// Update a field
    #[command(alias = "e")]
    Update {
        /// Field position (e.g. 2) or id
        field: String,

        #[arg(long)]
        label: Option<String>,

        #[arg(long)]
        placeholder: Option<String>,

        #[arg(long)]
        help_text: Option<String>,

        /// Mark the field as required
        #[arg(long, conflicts_with = "optional")]
        required: bool,

        /// Mark the field as optional
        #[arg(long)]
        optional: bool,

        /// Choice option as value=Label (repeatable, replaces existing)
        #[arg(long = "option", value_name = "VALUE=LABEL")]
        options: Vec<String>,

        #[arg(long)]
        min_length: Option<u32>,

        #[arg(long)]
        max_length: Option<u32>,

        /// Validation pattern (regular expression)
        #[arg(long)]
        pattern: Option<String>,

        /// Message shown when the pattern does not match
        #[arg(long)]
        message: Option<String>,

        /// Rows (textarea)
        #[arg(long)]
        rows: Option<u32>,

        /// Minimum value (number/range)
        #[arg(long)]
        min: Option<f64>,

        /// Maximum value (number/range/rating)
        #[arg(long)]
        max: Option<f64>,

        /// Step (number/range)
        #[arg(long)]
        step: Option<f64>,
    },

    /// Remove a field
    #[command(alias = "rm")]
    Remove {
        /// Field position (e.g. 2) or id
        field: String,
    },

    /// Duplicate a field
    #[command(alias = "dup")]
    Duplicate {
        /// Field position (e.g. 2) or id
        field: String,
    },

    /// Move a field to a new position
    #[command(alias = "mv")]
    Move {
        /// Current position (1-based)
        from: usize,

        /// Destination position (1-based)
        to: usize,
    },

    /// Select a field (or clear the selection)
    Select {
        /// Field position or id; omit with --none to clear
        field: Option<String>,

        /// Clear the selection
        #[arg(long)]
        none: bool,
    },

    /// Show or change form settings
    Settings {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Submit button caption
        #[arg(long)]
        submit_text: Option<String>,

        #[arg(long)]
        primary_color: Option<String>,

        #[arg(long)]
        background_color: Option<String>,

        #[arg(long)]
        text_color: Option<String>,

        #[arg(long)]
        border_radius: Option<String>,

        /// compact, medium, or spacious
        #[arg(long)]
        spacing: Option<String>,
    },

    /// Toggle preview mode
    Preview {
        /// on or off
        state: String,
    },

    /// Reset the form to an empty document
    Clear,

    /// List available field types
    Types {
        /// Filter by category: basic, datetime, selection, advanced, layout
        #[arg(long)]
        category: Option<String>,
    },

    /// List available templates
    Templates,

    /// Load a template into the form
    Template {
        /// Template id (see `formz templates`)
        id: String,
    },

    /// Export the form as JSON
    Export {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a form from an exported JSON file
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Validate values against the form without submitting
    Check {
        /// Values as field=value (field is a position or id)
        #[arg(value_name = "FIELD=VALUE")]
        values: Vec<String>,
    },

    /// Validate and submit values
    Submit {
        /// Values as field=value (field is a position or id)
        #[arg(value_name = "FIELD=VALUE")]
        values: Vec<String>,
    },
}
