//! LUT format conversion command

use crate::ConvertArgs;
use anyhow::{Result, bail};
use lutkit_cube::{CubeFile, cubefile, hald};

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let cube = super::load_cube(&args.input)?;

    if verbose {
        println!(
            "Converting {} (size {}) to {}",
            args.input.display(),
            cube.size,
            args.out.display()
        );
    }

    match super::extension(&args.out).as_str() {
        "cube" => {
            let mut file = CubeFile::from_cube(&cube);
            file.title = args.title;
            cubefile::write(&args.out, &file)?;
        }
        "png" | "jpg" | "jpeg" => {
            let img = hald::from_cube(&cube);
            super::save_image(&args.out, &img)?;
        }
        _ => bail!("unsupported file type: {}", args.out.display()),
    }

    if verbose {
        println!("Wrote {}", args.out.display());
    }

    Ok(())
}
