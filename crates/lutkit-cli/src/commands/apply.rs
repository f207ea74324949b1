//! LUT application command

use crate::ApplyArgs;
use anyhow::{Context, Result, bail};
use lutkit_cube::Interpolation;
#[allow(unused_imports)]
use tracing::{debug, info};

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let interp: Interpolation = args
        .interp
        .parse()
        .with_context(|| format!("invalid --interp value: {}", args.interp))?;

    if verbose {
        println!(
            "Applying LUT {} to {}",
            args.lut.display(),
            args.input.display()
        );
    }

    let src = super::load_image(&args.input)?;

    let ext = super::extension(&args.lut);
    let out = match ext.as_str() {
        "cube" => {
            if args.direct {
                bail!("--direct requires a Hald image LUT, not a .cube file");
            }
            let cube = super::load_cube(&args.lut)?;
            lutkit_ops::apply(&src, &cube, interp, args.intensity)?
        }
        "png" | "jpg" | "jpeg" => {
            if args.direct {
                let lut = super::load_image(&args.lut)?;
                lutkit_ops::apply_hald(&src, &lut, args.intensity)?
            } else {
                let cube = super::load_cube(&args.lut)?;
                lutkit_ops::apply(&src, &cube, interp, args.intensity)?
            }
        }
        _ => bail!("unsupported file type: {}", args.lut.display()),
    };

    super::save_image(&args.out, &out)?;

    if verbose {
        println!("Wrote {}", args.out.display());
    }

    Ok(())
}
