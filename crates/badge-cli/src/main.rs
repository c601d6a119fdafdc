use anyhow::Result;
use badge_layout::{Attendee, FontScale, PositionAdjustment, TypographyTuning};
use badge_pdf::BadgeOptions;
use badge_sheet::{LayoutMode, Template, statistics_for};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "badges", about = "Duplex badge sheet generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a badge PDF from an attendee CSV
    Generate {
        /// Input CSV file (columns: Company, LastName, FirstName)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Options JSON file to start from (flags below win)
        #[arg(long)]
        options: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Show statistics only, don't generate the PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Generate a sample PDF from the built-in demo roster
    Demo {
        /// Output PDF file
        #[arg(short, long, default_value = "badges-demo.pdf")]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Sheet template
    #[arg(long, value_enum)]
    template: Option<TemplateArg>,

    /// Card layout mode
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Share the batch minimum font sizes and maximum width
    #[arg(long)]
    uniform: bool,

    /// Vertical text offset adjustment in mm
    #[arg(long)]
    vertical: Option<f32>,

    /// Name/company gap adjustment in mm
    #[arg(long)]
    gap: Option<f32>,

    /// Text block width adjustment in mm
    #[arg(long)]
    width: Option<f32>,

    /// Horizontal text offset adjustment in mm
    #[arg(long)]
    horizontal: Option<f32>,

    /// Front face font scale (0.6 - 1.6)
    #[arg(long)]
    front_scale: Option<f32>,

    /// Back face font scale (0.6 - 1.6)
    #[arg(long)]
    back_scale: Option<f32>,

    /// Use the company-size boost for light-printing template stock
    #[arg(long)]
    heavy_ink: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    /// One 100x100mm card per sheet
    Single,
    /// Four cards per sheet, long-edge duplex
    Quad,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Mirror,
    Paired,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Single => Template::single(),
            TemplateArg::Quad => Template::quad(),
        }
    }
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Mirror => Self::Mirror,
            LayoutArg::Paired => Self::Paired,
        }
    }
}

impl LayoutArgs {
    fn apply(&self, options: &mut BadgeOptions) {
        if let Some(template) = self.template {
            options.template = template.into();
        }
        if let Some(layout) = self.layout {
            options.layout_mode = layout.into();
        }
        if self.uniform {
            options.uniform_scaling = true;
        }
        if self.heavy_ink {
            options.tuning = TypographyTuning::heavy_ink();
        }

        options.adjustments = PositionAdjustment {
            vertical_mm: self.vertical.unwrap_or(options.adjustments.vertical_mm),
            gap_mm: self.gap.unwrap_or(options.adjustments.gap_mm),
            width_mm: self.width.unwrap_or(options.adjustments.width_mm),
            horizontal_mm: self
                .horizontal
                .unwrap_or(options.adjustments.horizontal_mm),
        }
        .clamped();

        options.font_scale = FontScale {
            front: self.front_scale.unwrap_or(options.font_scale.front),
            back: self.back_scale.unwrap_or(options.font_scale.back),
        };
    }
}

fn demo_roster() -> Vec<Attendee> {
    [
        ("davara Abogados", "Rangel", "María"),
        ("Tsuru", "Aguayo", "Diego"),
        ("Grupo Andino", "Martínez", "Lucía"),
        ("Tech Partners", "López", "Camila"),
    ]
    .iter()
    .filter_map(|(company, last, first)| Attendee::from_fields(company, last, first))
    .collect()
}

fn print_statistics(attendees: &[Attendee], options: &BadgeOptions) {
    let stats = statistics_for(attendees, options.layout_mode, &options.template);
    println!("Print run:");
    println!("  People: {}", stats.people);
    println!("  Cards: {}", stats.cards);
    println!("  Sheets: {}", stats.sheets);
    println!("  Output pages: {}", stats.output_pages);
    if stats.empty_slots > 0 {
        println!("  Empty slots on last sheet: {}", stats.empty_slots);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            options,
            layout,
            stats_only,
        } => {
            let mut badge_options = match options {
                Some(path) => BadgeOptions::load(&path).await?,
                None => BadgeOptions::default(),
            };
            layout.apply(&mut badge_options);

            let attendees = badge_pdf::load_attendees_from_csv(&input).await?;
            print_statistics(&attendees, &badge_options);

            if stats_only {
                return Ok(());
            }

            badge_pdf::generate_badges_pdf(&attendees, &badge_options, &output).await?;
            println!("Generated {} badges → {}", attendees.len(), output.display());
        }

        Commands::Demo { output, layout } => {
            let mut badge_options = BadgeOptions::default();
            layout.apply(&mut badge_options);

            let attendees = demo_roster();
            print_statistics(&attendees, &badge_options);

            badge_pdf::generate_badges_pdf(&attendees, &badge_options, &output).await?;
            println!("Generated demo badges → {}", output.display());
        }
    }

    Ok(())
}
