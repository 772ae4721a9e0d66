use std::path::PathBuf;

use clap::{Args, Parser, ValueHint};

use crate::render::{Camera, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Smallest and largest accepted image side, in pixels.
const MIN_SIDE: i64 = 100;
const MAX_SIDE: i64 = 16384;

/// Options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Chart title (defaults to the input names joined with " vs ")
    #[arg(long)]
    pub title: Option<String>,

    /// Save to this .png or .svg file instead of opening a window
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Width in pixels of the window or saved image
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(MIN_SIDE..=MAX_SIDE)
    )]
    pub width: u32,

    /// Height in pixels of the window or saved image
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(MIN_SIDE..=MAX_SIDE)
    )]
    pub height: u32,
}

impl OutputArgs {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Plot time performance against problem size.
#[derive(Parser, Debug)]
#[command(name = "timeplot", version, about, long_about = None)]
pub struct TimeplotCli {
    /// Files with performance data (each row should be "N T")
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Plot time performance over a 3D grid of block sizes.
#[derive(Parser, Debug)]
#[command(name = "timeplot-g3d", version, about, long_about = None)]
pub struct SurfaceCli {
    /// Files with performance data (each row should be "I J N T")
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Only plot these problem sizes, in this order (e.g. 128,256,384,512)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<f64>,

    /// Initial camera yaw in radians
    #[arg(long, default_value_t = Camera::default().yaw, allow_negative_numbers = true)]
    pub yaw: f64,

    /// Initial camera pitch in radians
    #[arg(long, default_value_t = Camera::default().pitch, allow_negative_numbers = true)]
    pub pitch: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SurfaceCli {
    pub fn camera(&self) -> Camera {
        Camera {
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn clap_definitions_are_valid() {
        TimeplotCli::command().debug_assert();
        SurfaceCli::command().debug_assert();
    }

    #[test]
    fn timeplot_defaults() {
        let cli = TimeplotCli::try_parse_from(["timeplot", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cli.output.title, None);
        assert_eq!(cli.output.output, None);
        assert_eq!(cli.output.size(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn timeplot_requires_files() {
        assert!(TimeplotCli::try_parse_from(["timeplot"]).is_err());
    }

    #[test]
    fn timeplot_output_flags() {
        let cli = TimeplotCli::try_parse_from([
            "timeplot", "-o", "out.svg", "--title", "GEMM", "--width", "640", "a.txt",
        ])
        .unwrap();
        assert_eq!(cli.output.output, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.output.title.as_deref(), Some("GEMM"));
        assert_eq!(cli.output.width, 640);
    }

    #[test]
    fn surface_accepts_several_files_and_sizes() {
        let cli = SurfaceCli::try_parse_from([
            "timeplot-g3d",
            "--sizes",
            "128,256,384,512",
            "--pitch",
            "-0.2",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.sizes, vec![128.0, 256.0, 384.0, 512.0]);
        assert_eq!(cli.camera().pitch, -0.2);
        assert_eq!(cli.camera().yaw, Camera::default().yaw);
    }

    #[test]
    fn tiny_images_rejected() {
        assert!(TimeplotCli::try_parse_from(["timeplot", "--height", "5", "a.txt"]).is_err());
    }

    #[test]
    fn huge_images_rejected() {
        assert!(TimeplotCli::try_parse_from(["timeplot", "--width", "100000", "a.txt"]).is_err());
        let args = ["timeplot-g3d", "--height", "16385", "a.txt"];
        assert!(SurfaceCli::try_parse_from(args).is_err());

        let cli = TimeplotCli::try_parse_from(["timeplot", "--width", "16384", "a.txt"]).unwrap();
        assert_eq!(cli.output.width, 16384);
    }
}
