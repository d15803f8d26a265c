use nimbus::cloud::raster::{self, RasterOptions};
use nimbus::cloud::{SvgRenderOptions, layout_text, render_cloud_svg};
use nimbus::{
    CloudConfig, DeterministicTextMeasurer, DisplayWidthTextMeasurer, ReadService, StopwordFilter,
    TextMeasurer, count_words, tokenize,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Pipeline(nimbus::Error),
    Cloud(nimbus::cloud::CloudError),
    Raster(raster::RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Pipeline(err) => write!(f, "{err}"),
            CliError::Cloud(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<nimbus::Error> for CliError {
    fn from(value: nimbus::Error) -> Self {
        Self::Pipeline(value)
    }
}

impl From<nimbus::cloud::CloudError> for CliError {
    fn from(value: nimbus::cloud::CloudError) -> Self {
        Self::Cloud(value)
    }
}

impl From<raster::RasterError> for CliError {
    fn from(value: raster::RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Words,
    Layout,
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum TextMeasurerKind {
    Deterministic,
    #[default]
    DisplayWidth,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    stopwords: Option<String>,
    no_stopwords: bool,
    config: CloudConfig,
    text_measurer: TextMeasurerKind,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    show_boxes: bool,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Words,
            input: None,
            pretty: false,
            stopwords: None,
            no_stopwords: false,
            config: CloudConfig::default(),
            text_measurer: TextMeasurerKind::default(),
            render_format: RenderFormat::Svg,
            render_scale: 1.0,
            background: None,
            diagram_id: None,
            show_boxes: false,
            out: None,
        }
    }
}

fn usage() -> &'static str {
    "nimbus-cli\n\
\n\
USAGE:\n\
  nimbus-cli [words] [--pretty] [common flags] [<path>|-]\n\
  nimbus-cli layout [--pretty] [common flags] [<path>|-]\n\
  nimbus-cli render [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--id <svg-id>] [--show-boxes] [--out <path>] [common flags] [<path>|-]\n\
\n\
COMMON FLAGS:\n\
  --stopwords <path>        load the exclusion list from a file (one word per line)\n\
  --no-stopwords            disable the built-in English stoplist\n\
  --max-words <n>           keep only the N most frequent words (default 150, 0 = no limit)\n\
  --min-font <px>           font size of the rarest word (default 12)\n\
  --max-font <px>           font size of the most frequent word (default 64)\n\
  --font-family <css>       font stack for every tag\n\
  --angle-step <rad>        spiral angle step (default 0.1)\n\
  --radius-step <units>     spiral radius growth per turn (default 0.5)\n\
  --center-x <x>            cloud center x (default 0)\n\
  --center-y <y>            cloud center y (default 0)\n\
  --text-measurer deterministic|display-width\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - words prints the filtered frequency table as JSON; layout prints the placed cloud as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the input file (or ./out.<ext> for stdin).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    fn next_value<'a>(
        it: &mut impl Iterator<Item = &'a String>,
    ) -> Result<&'a String, CliError> {
        it.next().ok_or(CliError::Usage(usage()))
    }

    fn parse_f64(raw: &str) -> Result<f64, CliError> {
        raw.parse::<f64>().map_err(|_| CliError::Usage(usage()))
    }

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "words" => args.command = Command::Words,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--show-boxes" => args.show_boxes = true,
            "--no-stopwords" => args.no_stopwords = true,
            "--stopwords" => args.stopwords = Some(next_value(&mut it)?.clone()),
            "--max-words" => {
                let n = next_value(&mut it)?
                    .parse::<usize>()
                    .map_err(|_| CliError::Usage(usage()))?;
                args.config.max_words = if n == 0 { None } else { Some(n) };
            }
            "--min-font" => args.config.font.min_size = parse_f64(next_value(&mut it)?)?,
            "--max-font" => args.config.font.max_size = parse_f64(next_value(&mut it)?)?,
            "--font-family" => {
                args.config.font.family = Some(next_value(&mut it)?.clone());
            }
            "--angle-step" => args.config.angle_step = parse_f64(next_value(&mut it)?)?,
            "--radius-step" => args.config.radius_step = parse_f64(next_value(&mut it)?)?,
            "--center-x" => args.config.center_x = parse_f64(next_value(&mut it)?)?,
            "--center-y" => args.config.center_y = parse_f64(next_value(&mut it)?)?,
            "--text-measurer" => {
                args.text_measurer = match next_value(&mut it)?.as_str() {
                    "deterministic" => TextMeasurerKind::Deterministic,
                    "display-width" => TextMeasurerKind::DisplayWidth,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(ReadService::new().read(Path::new(path))?),
    }
}

fn build_stopwords(args: &Args) -> Result<StopwordFilter, CliError> {
    if let Some(path) = args.stopwords.as_deref() {
        return Ok(StopwordFilter::from_file(Path::new(path))?);
    }
    if args.no_stopwords {
        return Ok(StopwordFilter::empty());
    }
    Ok(StopwordFilter::default_english())
}

fn build_text_measurer(kind: TextMeasurerKind) -> Box<dyn TextMeasurer> {
    match kind {
        TextMeasurerKind::Deterministic => Box::new(DeterministicTextMeasurer::default()),
        TextMeasurerKind::DisplayWidth => Box::new(DisplayWidthTextMeasurer::default()),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn raster_out(args: &Args, ext: &str) -> String {
    args.out.clone().unwrap_or_else(|| {
        default_raster_out_path(args.input.as_deref(), ext)
            .to_string_lossy()
            .to_string()
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let stopwords = build_stopwords(&args)?;
    let measurer = build_text_measurer(args.text_measurer);

    match args.command {
        Command::Words => {
            let mut counts = count_words(stopwords.retain(tokenize(&text)));
            if let Some(max) = args.config.max_words {
                counts.truncate(max);
            }
            write_json(&counts, args.pretty)?;
            Ok(())
        }
        Command::Layout => {
            let layout = layout_text(&text, &args.config, &stopwords, measurer.as_ref())?;
            write_json(&layout, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let layout = layout_text(&text, &args.config, &stopwords, measurer.as_ref())?;
            let svg_options = SvgRenderOptions {
                diagram_id: args.diagram_id.clone(),
                background: args.background.clone(),
                font_family: args.config.font.family.clone(),
                show_boxes: args.show_boxes,
                ..Default::default()
            };
            let svg = render_cloud_svg(&layout, &svg_options);

            let raster_options = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..Default::default()
            };

            match args.render_format {
                RenderFormat::Svg => write_text(&svg, args.out.as_deref()),
                RenderFormat::Png => {
                    let bytes = raster::svg_to_png(&svg, &raster_options)?;
                    write_bytes(&bytes, &raster_out(&args, "png"))
                }
                RenderFormat::Jpeg => {
                    let bytes = raster::svg_to_jpeg(&svg, &raster_options)?;
                    write_bytes(&bytes, &raster_out(&args, "jpg"))
                }
                RenderFormat::Pdf => {
                    let bytes = raster::svg_to_pdf(&svg)?;
                    write_bytes(&bytes, &raster_out(&args, "pdf"))
                }
            }
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
