// src/ruleset/builtin.rs

//! The builtin, hand-maintained pipeline ruleset.
//!
//! This is the collected knowledge about the raw-photo processing pipe and
//! its sort order. Never reorder the pipe by editing priorities manually;
//! put new constraints in [`rules`] instead and let the tool recompute.

use crate::ruleset::Ruleset;

/// All known pipeline stages, including deprecated ones that may still
/// appear in old edits.
const STAGES: &[&str] = &[
    "anlfyeni", // deprecated
    "atrous",
    "basecurve",
    "bilateral",
    "bloom",
    "borders",
    "cacorrect",
    "channelmixer",
    "clahe", // deprecated
    "clipping",
    "colorcorrection",
    "colorin",
    "colorize",
    "colorout",
    "colortransfer",
    "colorzones",
    "colorcontrast",
    "demosaic",
    "equalizer", // deprecated
    "exposure",
    "flip",
    "gamma",
    "graduatednd",
    "grain",
    "highlights",
    "highpass",
    "invert",
    "hotpixels",
    "lens",
    "levels",
    "lowpass",
    "lowlight",
    "monochrome",
    "nlmeans",
    "overexposed",
    "profile_gamma",
    "rawdenoise",
    "relight",
    "shadhi",
    "sharpen",
    "shrecovery",
    "soften",
    "splittoning",
    "spots",
    "temperature",
    "tonecurve",
    "tonemap",
    "velvia",
    "vignette",
    "watermark",
    "zonesystem",
    "rawspeed",
];

/// Build the builtin ruleset used when no `--config` is given.
pub fn builtin() -> Ruleset {
    let mut r = Ruleset::new();
    for name in STAGES {
        r.stage(*name);
    }
    rules(&mut r);
    r
}

fn rules(r: &mut Ruleset) {
    // Color flow backbone: display encoding <- output profile <- Lab
    // <- input profile <- demosaic.
    r.must_follow("gamma", "colorout");
    r.must_follow("colorout", "colorin");
    r.must_follow("colorin", "demosaic");

    // These operate on mosaic data, before demosaicing.
    r.must_follow("demosaic", "rawspeed");
    r.must_follow("demosaic", "temperature");
    r.must_follow("demosaic", "hotpixels");
    r.must_follow("demosaic", "rawdenoise");
    r.must_follow("demosaic", "cacorrect");

    // cacorrect prefers denoised input.
    r.must_follow("cacorrect", "hotpixels");
    r.must_follow("cacorrect", "rawdenoise");

    // All of these want white-balanced input.
    r.must_follow("rawdenoise", "temperature");
    r.must_follow("hotpixels", "temperature");
    r.must_follow("cacorrect", "temperature");

    // rawspeed has to hand over the pixels before anything else.
    r.must_follow("temperature", "rawspeed");

    // Inversion belongs very early in the pipe.
    r.must_follow("temperature", "invert");

    // These need camera color space (linear input rgb).
    r.must_follow("colorin", "exposure");
    r.must_follow("colorin", "highlights");
    r.must_follow("colorin", "graduatednd");
    r.must_follow("colorin", "basecurve");
    r.must_follow("colorin", "lens");
    r.must_follow("colorin", "profile_gamma");
    r.must_follow("colorin", "shrecovery");

    // flip distorts geometry, so it goes after spot removal and lens
    // correction (both need original buffers) and after demosaic.
    r.must_follow("flip", "demosaic");
    r.must_follow("flip", "lens");
    r.must_follow("flip", "spots");
    // flip also confuses crop/rotate, vignetting and graduated density.
    r.must_follow("clipping", "flip");
    r.must_follow("graduatednd", "flip");
    r.must_follow("vignette", "flip");

    // Clip highlights as early as possible so later stages never see
    // unclipped pink highlights.
    r.must_follow("highlights", "demosaic");
    r.must_follow("exposure", "highlights");
    r.must_follow("graduatednd", "highlights");
    r.must_follow("basecurve", "highlights");
    r.must_follow("lens", "highlights");
    r.must_follow("tonemap", "highlights");
    r.must_follow("shrecovery", "highlights");
    // Lets shadow recovery fusion pick its working space.
    r.must_follow("shrecovery", "basecurve");

    // Vendor-profile workaround; must sit as late as possible before the
    // input profile.
    r.must_follow("profile_gamma", "exposure");
    r.must_follow("profile_gamma", "highlights");
    r.must_follow("profile_gamma", "graduatednd");
    r.must_follow("profile_gamma", "basecurve");
    r.must_follow("profile_gamma", "lens");
    r.must_follow("profile_gamma", "shrecovery");
    r.must_follow("profile_gamma", "bilateral");

    // These need Lab, i.e. between colorin and colorout.
    r.must_follow("colorout", "bloom");
    r.must_follow("colorout", "nlmeans");
    r.must_follow("colorout", "colortransfer");
    r.must_follow("colorout", "atrous");
    r.must_follow("colorout", "colorzones");
    r.must_follow("colorout", "lowlight");
    r.must_follow("colorout", "monochrome");
    r.must_follow("colorout", "zonesystem");
    r.must_follow("colorout", "tonecurve");
    r.must_follow("colorout", "levels");
    r.must_follow("colorout", "relight");
    r.must_follow("colorout", "colorcorrection");
    r.must_follow("colorout", "sharpen");
    r.must_follow("colorout", "grain");
    r.must_follow("colorout", "anlfyeni");
    r.must_follow("colorout", "lowpass");
    r.must_follow("colorout", "shadhi");
    r.must_follow("colorout", "highpass");
    r.must_follow("colorout", "colorcontrast");
    r.must_follow("colorout", "colorize");
    r.must_follow("bloom", "colorin");
    r.must_follow("nlmeans", "colorin");
    r.must_follow("colortransfer", "colorin");
    r.must_follow("atrous", "colorin");
    r.must_follow("colorzones", "colorin");
    r.must_follow("lowlight", "colorin");
    r.must_follow("monochrome", "colorin");
    r.must_follow("zonesystem", "colorin");
    r.must_follow("tonecurve", "colorin");
    r.must_follow("levels", "colorin");
    r.must_follow("relight", "colorin");
    r.must_follow("colorcorrection", "colorin");
    r.must_follow("sharpen", "colorin");
    r.must_follow("grain", "colorin");
    r.must_follow("anlfyeni", "colorin");
    r.must_follow("lowpass", "colorin");
    r.must_follow("shadhi", "colorin");
    r.must_follow("highpass", "colorin");
    r.must_follow("colorcontrast", "colorin");
    r.must_follow("colorize", "colorin");

    // Spot removal works on demosaiced data and precedes every geometric
    // distortion.
    r.must_follow("spots", "demosaic");
    r.must_follow("lens", "spots");
    r.must_follow("borders", "spots");
    r.must_follow("clipping", "spots");

    // Do color magic before monochroming.
    r.must_follow("monochrome", "colorzones");
    // Contrast changes still apply to monochrome images.
    r.must_follow("zonesystem", "monochrome");
    r.must_follow("tonecurve", "monochrome");
    r.must_follow("levels", "monochrome");
    r.must_follow("relight", "monochrome");

    // Splittone evenly, even when contrast changes afterwards.
    r.must_follow("colorcorrection", "zonesystem");
    r.must_follow("colorcorrection", "tonecurve");
    r.must_follow("colorcorrection", "levels");
    r.must_follow("colorcorrection", "relight");
    // And splittone monochrome images.
    r.must_follow("colorcorrection", "monochrome");

    // Detail/local contrast/sharpening want denoised input.
    r.must_follow("atrous", "nlmeans");
    r.must_follow("sharpen", "nlmeans");
    r.must_follow("anlfyeni", "nlmeans");
    r.must_follow("lowpass", "nlmeans");
    r.must_follow("shadhi", "nlmeans");
    r.must_follow("highpass", "nlmeans");
    r.must_follow("zonesystem", "nlmeans");
    r.must_follow("tonecurve", "nlmeans");
    r.must_follow("levels", "nlmeans");
    r.must_follow("relight", "nlmeans");
    r.must_follow("colorzones", "nlmeans");

    // Never sharpen grain.
    r.must_follow("grain", "sharpen");
    r.must_follow("grain", "anlfyeni");
    r.must_follow("grain", "atrous");
    r.must_follow("grain", "highpass");

    // Output-profile (sRGB) stages sit between gamma and colorout.
    r.must_follow("gamma", "channelmixer");
    r.must_follow("gamma", "clahe");
    r.must_follow("gamma", "velvia");
    r.must_follow("gamma", "soften");
    r.must_follow("gamma", "vignette");
    r.must_follow("gamma", "splittoning");
    r.must_follow("gamma", "watermark");
    r.must_follow("gamma", "overexposed");
    r.must_follow("gamma", "borders");
    r.must_follow("channelmixer", "colorout");
    r.must_follow("clahe", "colorout");
    r.must_follow("velvia", "colorout");
    r.must_follow("soften", "colorout");
    r.must_follow("vignette", "colorout");
    r.must_follow("splittoning", "colorout");
    r.must_follow("watermark", "colorout");
    r.must_follow("overexposed", "colorout");

    // Borders must not change shape or color.
    r.must_follow("borders", "colorout");
    r.must_follow("borders", "vignette");
    r.must_follow("borders", "splittoning");
    r.must_follow("borders", "velvia");
    r.must_follow("borders", "soften");
    r.must_follow("borders", "clahe");
    r.must_follow("borders", "channelmixer");
    // And never flag borders as over/under exposed.
    r.must_follow("borders", "overexposed");

    // Watermark may be drawn on top of borders.
    r.must_follow("watermark", "borders");

    // Sharpen after geometric transformations.
    r.must_follow("sharpen", "clipping");
    r.must_follow("sharpen", "lens");

    // Don't bloom away sharpness.
    r.must_follow("sharpen", "bloom");

    // Lens correction wants an uncropped buffer.
    r.must_follow("clipping", "lens");

    // Splittone vignettes and b/w conversions.
    r.must_follow("splittoning", "vignette");
    r.must_follow("splittoning", "channelmixer");

    // Exposure/basecurve tweaks apply after tone mapping.
    r.must_follow("exposure", "tonemap");
    r.must_follow("basecurve", "tonemap");
    // Tone mapping needs demosaiced data but not Lab.
    r.must_follow("tonemap", "demosaic");
    r.must_follow("colorin", "tonemap");

    // Fine-tuning stages go after color transfer injection.
    r.must_follow("atrous", "colortransfer");
    r.must_follow("colorzones", "colortransfer");
    r.must_follow("tonecurve", "colortransfer");
    r.must_follow("levels", "colortransfer");
    r.must_follow("monochrome", "colortransfer");
    r.must_follow("zonesystem", "colortransfer");
    r.must_follow("colorcorrection", "colortransfer");
    r.must_follow("relight", "colortransfer");
    r.must_follow("lowpass", "colortransfer");
    r.must_follow("shadhi", "colortransfer");
    r.must_follow("highpass", "colortransfer");
    r.must_follow("anlfyeni", "colortransfer");
    r.must_follow("lowlight", "colortransfer");
    r.must_follow("bloom", "colortransfer");

    // colorize goes first in the Lab part of the pipe.
    r.must_follow("colortransfer", "colorize");

    // Levels apply after the tone curve.
    r.must_follow("levels", "tonecurve");
    // Highpass filtering after lowpass.
    r.must_follow("highpass", "lowpass");

    // Shadows & highlights before tonecurve and friends.
    r.must_follow("tonecurve", "shadhi");
    r.must_follow("atrous", "shadhi");
    r.must_follow("levels", "shadhi");
    r.must_follow("zonesystem", "shadhi");
    r.must_follow("relight", "shadhi");

    // The bilateral filter runs in linear input rgb.
    r.must_follow("colorin", "bilateral");
    r.must_follow("bilateral", "demosaic");
    r.must_follow("colorout", "equalizer");
    r.must_follow("equalizer", "colorin");
}
