use crate::config::{OsdStyle, OverlayConfig};
use crate::sim::SimConfig;
use clap::Parser;
use std::path::PathBuf;
use vitahud_hw::buttons;
use vitahud_hw::specs::cpu::CORES;

#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 960)]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 544)]
    pub height: u32,

    /// Simulate a model without a battery
    #[arg(long)]
    pub no_battery: bool,

    /// Title id reported for the foreground application
    #[arg(long, default_value = "PCSE00000")]
    pub title_id: String,

    /// How the compact OSD is drawn
    #[arg(long, value_enum, default_value_t = OsdStyle::Direct)]
    pub osd_style: OsdStyle,

    /// Load of each core in percent, comma separated (e.g. 35,60,20,10)
    #[arg(long, value_delimiter = ',')]
    pub cpu_load: Vec<u8>,

    /// Frames to run in the headless runner
    #[arg(long, short = 'n', default_value_t = 300)]
    pub frames: u32,

    /// Buttons held on one frame, as FRAME=BUTTON[+BUTTON] (e.g. 10=select+up).
    /// May be repeated.
    #[arg(long, value_parser = parse_press)]
    pub press: Vec<Press>,

    /// Write the last framebuffer to this PNG file
    #[arg(long)]
    pub screenshot: Option<PathBuf>,
}

/// Buttons held during one scripted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub frame: u32,
    pub buttons: u32,
}

impl Args {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("--width and --height must be non-zero".to_string());
        }
        if !self.cpu_load.is_empty() && self.cpu_load.len() != CORES {
            return Err(format!(
                "--cpu-load takes {} values, got {}",
                CORES,
                self.cpu_load.len()
            ));
        }
        if let Some(load) = self.cpu_load.iter().find(|&&l| l > 100) {
            return Err(format!("--cpu-load value {} is above 100", load));
        }
        if self.title_id.is_empty() {
            return Err("--title-id must not be empty".to_string());
        }
        Ok(())
    }

    pub fn to_overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            osd_style: self.osd_style,
            ..OverlayConfig::default()
        }
    }

    pub fn to_sim_config(&self) -> SimConfig {
        let mut config = SimConfig {
            has_battery: !self.no_battery,
            title_id: self.title_id.clone(),
            ..SimConfig::default()
        };
        if let Ok(loads) = <[u8; CORES]>::try_from(self.cpu_load.as_slice()) {
            config.core_loads = loads;
        }
        config
    }

    /// Buttons scripted for `frame`.
    pub fn buttons_at(&self, frame: u32) -> u32 {
        self.press
            .iter()
            .filter(|p| p.frame == frame)
            .fold(0, |acc, p| acc | p.buttons)
    }
}

/// Look up a pad button by its lowercase name.
pub fn button_by_name(name: &str) -> Option<u32> {
    let mask = match name {
        "select" => buttons::SELECT,
        "start" => buttons::START,
        "up" => buttons::UP,
        "down" => buttons::DOWN,
        "left" => buttons::LEFT,
        "right" => buttons::RIGHT,
        "ltrigger" | "l" => buttons::LTRIGGER,
        "rtrigger" | "r" => buttons::RTRIGGER,
        "triangle" => buttons::TRIANGLE,
        "circle" => buttons::CIRCLE,
        "cross" => buttons::CROSS,
        "square" => buttons::SQUARE,
        _ => return None,
    };
    Some(mask)
}

pub fn parse_press(s: &str) -> Result<Press, String> {
    let (frame, names) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FRAME=BUTTON[+BUTTON], got {:?}", s))?;
    let frame = frame
        .trim()
        .parse()
        .map_err(|e| format!("bad frame number {:?}: {}", frame, e))?;

    let mut mask = 0;
    for name in names.split('+') {
        let name = name.trim().to_ascii_lowercase();
        mask |= button_by_name(&name).ok_or_else(|| format!("unknown button {:?}", name))?;
    }
    Ok(Press {
        frame,
        buttons: mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vitahud").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!((args.width, args.height), (960, 544));
        assert_eq!(args.frames, 300);
        assert_eq!(args.osd_style, OsdStyle::Direct);
        assert!(args.validate().is_ok());

        let sim = args.to_sim_config();
        assert!(sim.has_battery);
        assert_eq!(sim.core_loads, SimConfig::default().core_loads);
    }

    #[test]
    fn press_parsing() {
        assert_eq!(
            parse_press("10=select+up").unwrap(),
            Press {
                frame: 10,
                buttons: buttons::SELECT | buttons::UP,
            }
        );
        assert_eq!(parse_press("3=Cross").unwrap().buttons, buttons::CROSS);
        assert!(parse_press("select").is_err());
        assert!(parse_press("x=up").is_err());
        assert!(parse_press("1=jump").is_err());
    }

    #[test]
    fn presses_on_the_same_frame_combine() {
        let args = parse(&["--press", "5=select", "--press", "5=down", "--press", "6=up"]);
        assert_eq!(args.buttons_at(5), buttons::SELECT | buttons::DOWN);
        assert_eq!(args.buttons_at(6), buttons::UP);
        assert_eq!(args.buttons_at(7), 0);
    }

    #[test]
    fn cpu_load_needs_one_value_per_core() {
        let args = parse(&["--cpu-load", "10,20"]);
        assert!(args.validate().is_err());

        let args = parse(&["--cpu-load", "10,20,30,101"]);
        assert!(args.validate().is_err());

        let args = parse(&["--cpu-load", "10,20,30,40", "--no-battery"]);
        assert!(args.validate().is_ok());
        let sim = args.to_sim_config();
        assert_eq!(sim.core_loads, [10, 20, 30, 40]);
        assert!(!sim.has_battery);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(parse(&["--width", "0"]).validate().is_err());
    }

    #[test]
    fn osd_style_flag() {
        let args = parse(&["--osd-style", "panel"]);
        assert_eq!(args.to_overlay_config().osd_style, OsdStyle::Panel);
    }
}
