//! Layout conversion tool
//!
//! Converts drilling layouts between Dual Angle, VLS and 2LS, relocates a
//! layout for a new PAP, checks plausibility and lists the 2LS presets.
//!
//! Usage:
//!   cargo run --bin layout_tool -- convert --from vls --to dual-angle 4.5 3.5 2
//!   cargo run --bin layout_tool -- convert --from dual-angle --to two-ls --over 5 --up 1 40 4 55
//!   cargo run --bin layout_tool -- adjust --system dual-angle --over 5 --up 1 --new-over 4 --new-up 0.5 40 4 55
//!   cargo run --bin layout_tool -- check --over 5 --up 1 4 4
//!   cargo run --bin layout_tool -- --json presets --over 5 --up 1

use bowling_layout::layout::Unit;
use bowling_layout::{
    adjust::adjust_layout_signed, Hand, Layout, LayoutMarkers, LayoutSystem, Pap, PlausibilityCheck,
    TWO_LS_PRESETS,
};
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Bowling layout conversion tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts, relocates and checks bowling ball drilling layouts",
    long_about = None
)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    /// Log intermediate geometry
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a layout to another system
    Convert {
        #[arg(long, value_enum)]
        from: System,

        #[arg(long, value_enum)]
        to: System,

        #[command(flatten)]
        pap: PapArgs,

        /// The three layout values in field order
        #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Re-express a layout for a moved PAP
    Adjust {
        #[arg(long, value_enum, default_value = "dual-angle")]
        system: System,

        #[command(flatten)]
        pap: PapArgs,

        /// New PAP over, in inches
        #[arg(long, allow_negative_numbers = true)]
        new_over: f64,

        /// New PAP up, in inches
        #[arg(long, allow_negative_numbers = true)]
        new_up: f64,

        /// Also print marker positions for this hand
        #[arg(long, value_enum)]
        markers: Option<HandArg>,

        #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Check that a pin-to-PAP / pin-to-COG pair fits the PAP
    Check {
        #[command(flatten)]
        pap: PapArgs,

        /// Slack in inches for hand measurements
        #[arg(long)]
        tolerance: Option<f64>,

        pin_to_pap: f64,

        pin_to_cog: f64,
    },

    /// List the 2LS presets, with their Dual Angle form when a PAP is given
    Presets {
        #[command(flatten)]
        pap: PapArgs,
    },
}

/// Bowler's PAP, measured from the grip center
#[derive(ClapArgs, Debug)]
struct PapArgs {
    /// PAP over, in inches
    #[arg(long, allow_negative_numbers = true, requires = "up")]
    over: Option<f64>,

    /// PAP up, in inches
    #[arg(long, allow_negative_numbers = true, requires = "over")]
    up: Option<f64>,
}

impl PapArgs {
    fn pap(&self) -> Option<Pap> {
        match (self.over, self.up) {
            (Some(over), Some(up)) => Some(Pap::new(over, up)),
            _ => None,
        }
    }

    fn required(&self) -> Result<Pap> {
        self.pap().ok_or_else(|| "--over and --up are required".into())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum System {
    DualAngle,
    Vls,
    TwoLs,
}

impl From<System> for LayoutSystem {
    fn from(system: System) -> Self {
        match system {
            System::DualAngle => LayoutSystem::DualAngle,
            System::Vls => LayoutSystem::Vls,
            System::TwoLs => LayoutSystem::TwoLs,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HandArg {
    Right,
    Left,
}

impl From<HandArg> for Hand {
    fn from(hand: HandArg) -> Self {
        match hand {
            HandArg::Right => Hand::Right,
            HandArg::Left => Hand::Left,
        }
    }
}

#[derive(Serialize)]
struct AdjustReport {
    layout: Layout,
    drill_signed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    markers: Option<MarkerReport>,
}

/// Marker positions in inches from the ball center
#[derive(Serialize)]
struct MarkerReport {
    pap: [f64; 3],
    old_pap: Option<[f64; 3]>,
    pin: [f64; 3],
    psa: [f64; 3],
}

impl From<LayoutMarkers> for MarkerReport {
    fn from(markers: LayoutMarkers) -> Self {
        let xyz = |v: nalgebra::Vector3<f64>| [v.x, v.y, v.z];
        MarkerReport {
            pap: xyz(markers.pap),
            old_pap: markers.old_pap.map(xyz),
            pin: xyz(markers.pin),
            psa: xyz(markers.psa),
        }
    }
}

#[derive(Serialize)]
struct CheckReport {
    plausible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

#[derive(Serialize)]
struct PresetReport {
    label: &'static str,
    layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    dual_angle: Option<Layout>,
}

fn layout_from(system: System, values: &[f64]) -> Result<Layout> {
    let values: [f64; 3] = values
        .try_into()
        .map_err(|_| format!("expected 3 layout values, got {}", values.len()))?;
    Ok(Layout::from_values(system.into(), values))
}

/// Prints a layout as `name = value unit` lines
fn print_layout(layout: &Layout) {
    println!("{}:", layout.system());
    for ((name, unit), value) in layout.system().fields().iter().zip(layout.values()) {
        let unit = match unit {
            Unit::Degrees => "°",
            Unit::Inches => "in",
        };
        println!("  {:<12} {:>9.4} {}", name, value, unit);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_convert(args: &Args, from: System, to: System, pap: &PapArgs, values: &[f64]) -> Result<()> {
    let layout = layout_from(from, values)?;
    let converted = layout.convert(to.into(), pap.pap().as_ref())?;
    log::info!("{} -> {}", layout.system(), converted.system());

    if args.json {
        print_json(&converted)
    } else {
        print_layout(&converted);
        Ok(())
    }
}

fn run_adjust(
    args: &Args,
    system: System,
    pap: &PapArgs,
    new_pap: Pap,
    markers: Option<HandArg>,
    values: &[f64],
) -> Result<()> {
    let old_pap = pap.required()?;
    let layout = layout_from(system, values)?;
    let (adjusted, drill_signed) = adjust_layout_signed(&old_pap, &layout, &new_pap)?;

    let markers = match markers {
        Some(hand) => {
            let da = adjusted.to_dual_angle(Some(&new_pap))?;
            let placed = LayoutMarkers::place(&new_pap, &da, Some(drill_signed))
                .with_old_pap(&old_pap)
                .for_hand(hand.into())
                .scaled(bowling_layout::constants::BALL_RADIUS);
            Some(MarkerReport::from(placed))
        }
        None => None,
    };

    let report = AdjustReport {
        layout: adjusted,
        drill_signed,
        markers,
    };
    if args.json {
        return print_json(&report);
    }

    print_layout(&report.layout);
    println!("  {:<12} {:>9.4} °", "drill_signed", report.drill_signed);
    if let Some(m) = &report.markers {
        println!("Markers (in):");
        for (name, p) in [("pap", &m.pap), ("pin", &m.pin), ("psa", &m.psa)] {
            println!("  {:<12} ({:>8.4}, {:>8.4}, {:>8.4})", name, p[0], p[1], p[2]);
        }
        if let Some(p) = &m.old_pap {
            println!("  {:<12} ({:>8.4}, {:>8.4}, {:>8.4})", "old_pap", p[0], p[1], p[2]);
        }
    }
    Ok(())
}

fn run_check(args: &Args, pap: &PapArgs, tolerance: Option<f64>, pin_to_pap: f64, pin_to_cog: f64) -> Result<()> {
    let pap = pap.required()?;
    let mut check = PlausibilityCheck::new();
    if let Some(tolerance) = tolerance {
        check = check.with_tolerance(tolerance);
    }

    let warning = check.assess(pin_to_pap, pin_to_cog, &pap).err();
    if let Some(w) = &warning {
        log::warn!("{}", w);
    }
    let report = CheckReport {
        plausible: warning.is_none(),
        warning: warning.map(|w| w.to_string()),
    };

    if args.json {
        print_json(&report)
    } else {
        match &report.warning {
            None => println!("plausible"),
            Some(w) => println!("implausible: {}", w),
        }
        Ok(())
    }
}

fn run_presets(args: &Args, pap: &PapArgs) -> Result<()> {
    let pap = pap.pap();
    let mut reports = Vec::with_capacity(TWO_LS_PRESETS.len());
    for preset in TWO_LS_PRESETS.iter() {
        let layout = Layout::TwoLs(preset.layout);
        let dual_angle = match &pap {
            Some(pap) => Some(layout.convert(LayoutSystem::DualAngle, Some(pap))?),
            None => None,
        };
        reports.push(PresetReport {
            label: preset.label,
            layout,
            dual_angle,
        });
    }

    if args.json {
        return print_json(&reports);
    }
    for report in &reports {
        println!("\nPreset {}", report.label);
        print_layout(&report.layout);
        if let Some(da) = &report.dual_angle {
            print_layout(da);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    match &args.command {
        Command::Convert { from, to, pap, values } => run_convert(&args, *from, *to, pap, values),
        Command::Adjust {
            system,
            pap,
            new_over,
            new_up,
            markers,
            values,
        } => run_adjust(&args, *system, pap, Pap::new(*new_over, *new_up), *markers, values),
        Command::Check {
            pap,
            tolerance,
            pin_to_pap,
            pin_to_cog,
        } => run_check(&args, pap, *tolerance, *pin_to_pap, *pin_to_cog),
        Command::Presets { pap } => run_presets(&args, pap),
    }
}
