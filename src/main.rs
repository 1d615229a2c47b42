//! Headless driver: loads a topic section, applies parameter overrides and
//! runs the device animation for a fixed number of frames, logging the
//! operating point and the channel as it settles.

use std::path::PathBuf;

use clap::Parser;
use semiviz::content::{Section, TopicStore};
use semiviz::device::{ParamValue, ParameterMap};
use semiviz::engine::TransistorViz;
use semiviz::error::SemivizError;
use semiviz::host::{Camera, RenderHost};
use semiviz::options::Options;
use semiviz::scene::DeviceScene;
use semiviz::util::frame_timing::FrameTiming;

/// Run a device section headlessly and log how the channel settles.
#[derive(Debug, Parser)]
#[command(name = "semiviz", version)]
struct Cli {
    /// Id of a built-in topic.
    #[arg(long, default_value = "nmos-transistor", conflicts_with = "file")]
    topic: String,
    /// Topic JSON document to load instead of a built-in topic.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Section id; defaults to the topic's first section.
    #[arg(long)]
    section: Option<String>,
    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u32,
    /// Frame rate cap (0 = unlimited).
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// TOML options preset.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Parameter overrides (e.g. Vg=3.5 Vd=4).
    #[arg(trailing_var_arg = true, value_parser = parse_override)]
    overrides: Vec<(String, ParamValue)>,
}

fn parse_override(arg: &str) -> Result<(String, ParamValue), String> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {arg:?}"))?;
    if key.is_empty() {
        return Err(format!("missing key in {arg:?}"));
    }
    Ok((key.to_owned(), parse_value(raw)))
}

fn parse_value(raw: &str) -> ParamValue {
    match (raw.parse::<f64>(), raw.parse::<bool>()) {
        (Ok(n), _) => ParamValue::Number(n),
        (_, Ok(b)) => ParamValue::Bool(b),
        _ => ParamValue::Text(raw.to_owned()),
    }
}

fn pick_section<'a>(
    store: &'a TopicStore,
    topic_id: &str,
    section_id: Option<&str>,
) -> Result<&'a Section, SemivizError> {
    let topic = store.require(topic_id)?;
    let section = match section_id {
        Some(id) => topic.find_section(id),
        None => topic.first_section(),
    };
    section.ok_or_else(|| SemivizError::UnknownSection {
        topic: topic_id.to_owned(),
        section: section_id.unwrap_or_default().to_owned(),
    })
}

fn run(args: Cli) -> Result<(), SemivizError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut store = TopicStore::builtin()?;
    let topic_id = match &args.file {
        Some(path) => store.load_file(path)?,
        None => args.topic.clone(),
    };
    let section = pick_section(&store, &topic_id, args.section.as_deref())?;
    log::info!("Section {:?}: {}", section.id, section.title);
    for control in section.interactive_elements.iter().flatten() {
        log::info!(
            "Control {} ({}): range {:?}, step {:?}",
            control.id,
            control.label,
            control.range,
            control.step()
        );
    }

    let mut params: ParameterMap = section.default_parameters();
    params.extend(args.overrides);

    let mut host = RenderHost::new(
        DeviceScene::new(),
        Camera::from_options(&options.camera),
    );
    let mut viz =
        TransistorViz::new(section.visualization_state.clone(), options);
    viz.set_parameters(&mut host, params);
    viz.mount(&mut host);

    let op = viz.operating_point();
    log::info!(
        "Vgs={:.3} Vds={:.3} Vov={:.3} Id={:.4} ({:.1}% of saturation), \
         {:?}",
        op.vgs,
        op.vds,
        op.vov,
        op.id,
        op.normalized_id * 100.0,
        op.region
    );

    let mut timing = FrameTiming::new(args.fps);
    for _ in 0..args.frames {
        std::thread::sleep(timing.until_next_frame());
        let dt = timing.end_frame();
        let frame = host.frame(dt);
        log_channel(&host, frame.index);
    }
    log::info!(
        "Ran {} frames in {:.2}s ({:.1} fps)",
        host.frame_count(),
        host.elapsed().as_secs_f32(),
        timing.fps()
    );

    viz.unmount(&mut host);
    Ok(())
}

fn log_channel(host: &RenderHost<DeviceScene>, index: u64) {
    let Some(layers) = host.scene().layers.as_ref() else {
        return;
    };
    if let Some(channel) = layers.channel.as_ref() {
        log::debug!(
            "frame {index}: channel scale={:.3} glow={:.3} opacity={:.3} \
             visible={}",
            channel.scale.x,
            channel.material.emissive_intensity,
            channel.material.opacity,
            channel.visible
        );
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
