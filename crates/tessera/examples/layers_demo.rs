use argh::FromArgs;

use tessera::{
    image::{Color, Image, ImageSize},
    imgproc::{
        mosaic::Mosaic,
        pattern::{Checkerboard, Rainbow},
        resize::Downscale,
        Editor,
    },
    layers::LayeredModel,
};

#[derive(FromArgs)]
/// Build a two layer image from generated patterns and apply an editor to it
struct Args {
    /// the editor to apply: blur, sharpen, greyscale, sepia, mosaic or downscale
    #[argh(option, default = "String::from(\"sepia\")")]
    effect: String,

    /// the side of a checkerboard tile in pixels
    #[argh(option, default = "8")]
    tile_size: usize,

    /// the number of checkerboard tiles per side
    #[argh(option, default = "7")]
    num_tiles: usize,

    /// the number of mosaic seeds
    #[argh(option, default = "32")]
    seeds: usize,

    /// seed of the mosaic random generator
    #[argh(option)]
    rng_seed: Option<u64>,

    /// hide the rainbow layer before printing the result
    #[argh(switch)]
    hide_top: bool,
}

fn mean_color(image: &Image) -> Color {
    let n = image.size().area() as u64;
    let mut sum = [0u64; 3];
    for color in image.as_slice() {
        for (acc, v) in sum.iter_mut().zip(color.to_array()) {
            *acc += u64::from(v);
        }
    }
    Color::new((sum[0] / n) as u32, (sum[1] / n) as u32, (sum[2] / n) as u32)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let side = args.tile_size * args.num_tiles;

    let editor: Editor = match args.effect.to_lowercase().as_str() {
        "blur" => Editor::blur(),
        "sharpen" => Editor::sharpen(),
        "greyscale" => Editor::greyscale(),
        "sepia" => Editor::sepia(),
        "mosaic" => match args.rng_seed {
            Some(seed) => Mosaic::with_seed(args.seeds, seed)?.into(),
            None => Mosaic::new(args.seeds)?.into(),
        },
        "downscale" => Downscale::new(ImageSize {
            width: side / 2,
            height: side / 2,
        })?
        .into(),
        other => return Err(format!("unknown effect: {other}").into()),
    };

    let mut model = LayeredModel::new();

    model.create_layer();
    let board = model.draw(&Checkerboard::with_default_palette(
        args.tile_size,
        args.num_tiles,
    )?)?;
    model.set_image(board)?;

    model.create_layer();
    let rainbow = model.draw(&Rainbow::new(side, side / 7 * 7)?)?;
    model.set_image(rainbow)?;

    log::info!("created {} layers of {}x{} pixels", model.len(), side, side);

    model.set_effect(editor);
    model.apply_operation()?;

    if args.hide_top {
        model.set_visible(1, false)?;
    }

    for (index, layer) in model.layers().enumerate() {
        match layer.image() {
            Some(image) => println!(
                "layer {}: {} visible={} mean={}",
                index + 1,
                image.size(),
                layer.is_visible(),
                mean_color(image)
            ),
            None => println!("layer {}: empty", index + 1),
        }
    }

    if let Some(image) = model.topmost_visible_image() {
        println!("shown: {} mean={}", image.size(), mean_color(image));
    }

    Ok(())
}
