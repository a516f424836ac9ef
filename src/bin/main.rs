extern crate rust_raymarcher as root;

#[macro_use]
extern crate tracing;

use root::prelude::*;
use root::parsing::get_settings;

use tracing_subscriber::filter::LevelFilter;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// optional TOML settings file. without one, the reference 1920x1080 render is produced
    #[structopt(long)]
    pub config_file: Option<String>,
    /// ppm output path, overrides the settings file
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    /// also save a png copy to this path
    #[structopt(long)]
    pub png: Option<String>,
    #[structopt(long)]
    pub threads: Option<u16>,
    /// shade scanlines on a thread pool instead of one pixel at a time
    #[structopt(long)]
    pub parallel: bool,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn load_settings(opts: &Opt) -> anyhow::Result<RenderSettings> {
    let mut settings = match opts.config_file.as_ref() {
        Some(path) => get_settings(path)?,
        None => RenderSettings {
            threads: Some(num_cpus::get() as u16),
            ..RenderSettings::default()
        },
    };

    // command line wins over the settings file
    if let Some(output) = opts.output.as_ref() {
        settings.filename = output.clone();
    }
    if let Some(png) = opts.png.as_ref() {
        settings.png_filename = Some(png.clone());
    }
    if let Some(threads) = opts.threads {
        settings.threads = Some(threads);
    }
    if opts.parallel {
        settings.renderer = RendererType::Parallel;
    }
    settings.validate()?;
    Ok(settings)
}

fn dry_run(settings: &RenderSettings) {
    let camera = PinholeCamera::from_settings(&settings.camera, settings.resolution);
    let integrator = WhittedIntegrator::new(Scene::default_scene(), settings);
    let (x, y) = (settings.resolution.width / 2, settings.resolution.height / 2);
    let ray = camera.get_ray(x, y);
    let mut profile = Profile::default();
    let color = integrator.color(ray, &mut profile);
    match integrator.first_hit(ray) {
        Some((distance, object)) => info!(
            "pixel ({}, {}) hits object {} at distance {}",
            x, y, object, distance
        ),
        None => info!("pixel ({}, {}) escapes the scene", x, y),
    }
    info!("pixel ({}, {}) = {:?} -> {:?}", x, y, color, color.to_rgb8());
    info!("dry run, nothing written");
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let settings = load_settings(&opts)?;

    let threads = settings.threads.unwrap_or(1);
    match settings.renderer {
        RendererType::Parallel if threads == 1 => {
            warn!("parallel renderer requested with a single thread")
        }
        RendererType::Naive if threads > 1 => {
            debug!("naive renderer ignores threads = {}", threads)
        }
        _ => {}
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;

    if opts.dry_run {
        dry_run(&settings);
        return Ok(());
    }

    let (film, _profile) = render(&settings);
    output_film(&settings, &film)
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .with_writer(std::io::stderr)
        .init();

    run(opts).inspect_err(|e| error!("render failed: {:#}", e))
}
