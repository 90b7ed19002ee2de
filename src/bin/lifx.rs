use std::process;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::debug;

use lifx::{
    models::{ColorSpec, ColorValue, EffectParams, PowerMode, Rgb, Selector},
    output, response,
    routes::{effects, lights, state, ActionRequest},
    Client, Config, Error, Result,
};

#[derive(Debug, Parser)]
#[command(name = "lifx", version, about = "Command line interface for LIFX light bulbs", long_about = None)]
struct Cli {
    #[arg(short, long, env = "LIFX_TOKEN", hide_env_values = true, global = true)]
    /// Personal access token, overrides the stored one
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Turn lights on
    On(PowerArgs),

    /// Turn lights off
    Off(PowerArgs),

    /// Set power and color
    State(StateArgs),

    /// Toggle the power of lights
    Toggle(PowerArgs),

    /// Flash between two colors
    Pulse(EffectArgs),

    /// Fade between two colors
    Breathe(EffectArgs),

    /// List lights and their state
    List(ListArgs),

    /// List the known color names
    Colors,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
struct SelectorArgs {
    #[arg(short, long)]
    /// The lights belonging to the group with this name
    group: Option<String>,

    #[arg(short, long)]
    /// Lights that match the label
    label: Option<String>,

    #[arg(short = 'L', long)]
    /// The lights belonging to the location with this name
    location: Option<String>,
}

impl SelectorArgs {
    fn selector(&self) -> Result<Selector> {
        Selector::from_flags(
            self.label.as_deref(),
            self.group.as_deref(),
            self.location.as_deref(),
        )
    }
}

#[derive(Debug, Args)]
struct PowerArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    #[arg(short, long)]
    /// How long in seconds the change should take
    duration: Option<f64>,

    #[arg(short, long)]
    /// Print the outcome for each light
    verbose: bool,
}

#[derive(Debug, Args)]
struct StateArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    #[arg(short, long, value_name = "on|off")]
    /// Whether to set power to "on" or "off"
    power: Option<PowerMode>,

    #[command(flatten)]
    color: ColorArgs,

    #[arg(short, long)]
    /// How long in seconds the change should take
    duration: Option<f64>,

    #[arg(short, long)]
    /// Print the outcome for each light
    verbose: bool,
}

#[derive(Debug, Args)]
struct ColorArgs {
    #[arg(short, long, conflicts_with = "rgb")]
    /// Color name or hex value, e.g. "red" or "#ff0000"
    color: Option<ColorValue>,

    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"], action = ArgAction::Set)]
    /// Color as three values from 0 to 255
    rgb: Option<Vec<u8>>,

    #[arg(short = 'H', long)]
    /// Hue in degrees (0-360) without affecting other components
    hue: Option<f64>,

    #[arg(short, long)]
    /// Saturation (0.0-1.0) without affecting other components
    saturation: Option<f64>,

    #[arg(short, long)]
    /// Brightness (0.0-1.0) without affecting other components
    brightness: Option<f64>,

    #[arg(short, long)]
    /// Kelvin, sets saturation to 0.0 as well
    kelvin: Option<u16>,
}

impl ColorArgs {
    fn spec(&self) -> Result<ColorSpec> {
        Ok(ColorSpec {
            color: self.color.clone(),
            rgb: rgb(self.rgb.as_deref())?,
            hue: self.hue,
            saturation: self.saturation,
            brightness: self.brightness,
            kelvin: self.kelvin,
        })
    }
}

#[derive(Debug, Args)]
struct FromColorArgs {
    #[arg(long, conflicts_with = "from_rgb")]
    /// Color name or hex value to start from
    from_color: Option<ColorValue>,

    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], action = ArgAction::Set)]
    /// Rgb color to start from
    from_rgb: Option<Vec<u8>>,

    #[arg(long)]
    /// Hue to start from
    from_hue: Option<f64>,

    #[arg(long)]
    /// Saturation to start from
    from_saturation: Option<f64>,

    #[arg(long)]
    /// Brightness to start from
    from_brightness: Option<f64>,

    #[arg(long)]
    /// Kelvin to start from
    from_kelvin: Option<u16>,
}

impl FromColorArgs {
    fn spec(&self) -> Result<ColorSpec> {
        Ok(ColorSpec {
            color: self.from_color.clone(),
            rgb: rgb(self.from_rgb.as_deref())?,
            hue: self.from_hue,
            saturation: self.from_saturation,
            brightness: self.from_brightness,
            kelvin: self.from_kelvin,
        })
    }
}

fn rgb(values: Option<&[u8]>) -> Result<Option<Rgb>> {
    match values {
        None => Ok(None),
        Some([red, green, blue]) => Ok(Some(Rgb::new(*red, *green, *blue))),
        Some(other) => Err(Error::InvalidColor(format!("{:?}", other))),
    }
}

#[derive(Debug, Args)]
struct EffectArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    #[arg(short, long, default_value_t = 1.0)]
    /// The time in seconds for one cycle of the effect
    period: f64,

    #[arg(short = 'C', long, default_value_t = 1.0)]
    /// The number of times to repeat the effect
    cycles: f64,

    #[arg(short = 'E', long, default_value_t = 0.5)]
    /// Where in a period the target color is at its maximum (0.0-1.0)
    peak: f64,

    #[arg(short = 'e', long)]
    /// Keep the last color of the effect when it is done
    persist: bool,

    #[arg(short = 'P', long)]
    /// Don't turn the light on first if it is off
    no_power_on: bool,

    #[command(flatten)]
    color: ColorArgs,

    #[command(flatten)]
    from: FromColorArgs,

    #[arg(short, long)]
    /// Print the outcome for each light
    verbose: bool,
}

impl EffectArgs {
    fn params(&self) -> Result<EffectParams> {
        Ok(EffectParams {
            period: self.period,
            cycles: self.cycles,
            peak: self.peak,
            persist: self.persist,
            power_on: !self.no_power_on,
            color: self.color.spec()?,
            from_color: self.from.spec()?,
        })
    }
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    #[arg(short, long)]
    /// List every field of each light
    verbose: bool,
}

impl Command {
    /// Build the request, catching user errors before any network access
    ///
    /// Returns [None] for commands that don't talk to the api.
    fn request(&self) -> Result<Option<ActionRequest>> {
        let req = match self {
            Command::On(args) => {
                state::power(args.selector.selector()?, PowerMode::On, args.duration)?
            }
            Command::Off(args) => {
                state::power(args.selector.selector()?, PowerMode::Off, args.duration)?
            }
            Command::State(args) => state::state(
                args.selector.selector()?,
                args.power,
                &args.color.spec()?,
                args.duration,
            )?,
            Command::Toggle(args) => state::toggle(args.selector.selector()?, args.duration)?,
            Command::Pulse(args) => effects::pulse(args.selector.selector()?, &args.params()?)?,
            Command::Breathe(args) => {
                effects::breathe(args.selector.selector()?, &args.params()?)?
            }
            Command::List(args) => lights::list(args.selector.selector()?),
            Command::Colors => return Ok(None),
        };
        Ok(Some(req))
    }

    fn verbose(&self) -> bool {
        match self {
            Command::On(args) | Command::Off(args) | Command::Toggle(args) => args.verbose,
            Command::State(args) => args.verbose,
            Command::Pulse(args) | Command::Breathe(args) => args.verbose,
            Command::List(args) => args.verbose,
            Command::Colors => false,
        }
    }
}

fn run(token: Option<&str>, command: &Command) -> Result<()> {
    let Some(request) = command.request()? else {
        print!("{}", output::format_colors());
        return Ok(());
    };
    debug!("built {:?}", request);

    let config = Config::from_env();
    let token = lifx::resolve_token(token, &config)?;
    let client = Client::new(&token, &config)?;
    let resp = response::check(client.send(&request)?)?;

    match command {
        Command::List(args) => {
            let lights = response::lights(&resp)?;
            print!("{}", output::format_lights(&lights, args.verbose));
        }
        _ if command.verbose() => match response::results(&resp) {
            Ok(results) => print!("{}", output::format_results(&results)),
            Err(_) => println!("{}", resp.text()),
        },
        _ => {}
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // help and version are not errors
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        process::exit(1);
    };

    if let Err(e) = run(cli.token.as_deref(), &command) {
        eprintln!("Error: {e}");
        if e.is_user_error() {
            eprintln!("\nFor more information, try '--help'.");
        }
        process::exit(e.exit_code());
    }
}
