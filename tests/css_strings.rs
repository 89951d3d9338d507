// End-to-end checks of the public API: parsing every notation, writing channels, and rendering back
// out, plus the conversion round trips over a grid of inputs.

#[macro_use]
extern crate float_cmp;
extern crate serde_json;
extern crate tincture;

use tincture::keywords;
use tincture::prelude::*;

#[test]
fn test_literal_scenarios() {
    let color = Color::parse("#012").unwrap();
    assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (0., 17., 34., 1.));

    let color = Color::parse("rgba(56, 38.2, 12, 0.354)").unwrap();
    assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (56., 38.2, 12., 0.354));

    let color = Color::parse("chocolate").unwrap();
    assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (210., 105., 30., 1.));

    let color = Color::parse("hsla(45, 0.234%, 12%, 0.65)").unwrap();
    assert_eq!(color.hue(), 45.);
    assert!(approx_eq!(f64, color.saturation(), 0.00234, epsilon = 1e-12));
    assert_eq!(color.lightness(), 0.12);
    assert_eq!(color.alpha(), 0.65);
}

#[test]
fn test_literal_formatting() {
    let mut color = Color::new();
    color.set_red(255);
    color.set_green(24);
    color.set_blue(23);
    assert_eq!(color.to_hex_string(false), "#FFFF1817");

    color.set_red(100);
    color.set_green(45);
    color.set_blue(200);
    assert_eq!(color.to_hex_string(true), "#642DC8");

    color.set_red(255);
    color.set_green(2);
    color.set_blue(24);
    color.set_alpha(0.1);
    assert_eq!(color.to_rgb_string(false), "rgb(26, 0, 2)");
    assert_eq!(color.to_rgba_string(false), "rgba(255, 2, 24, 0.1)");
}

#[test]
fn test_hue_policy() {
    let mut color = Color::new();
    color.set_hue(720);
    assert_eq!(color.hue(), 0.);
    color.set_hue(-24);
    assert_eq!(color.hue(), 0.);
}

#[test]
fn test_classify_is_total() {
    let inputs = [
        "", " ", "#", "#f", "#ff", "#fff", "#ffff", "#fffff", "#ffffff", "#fffffff", "#ffffffff",
        "rgb()", "rgb(1,2)", "rgb(1,2,3)", "rgba(1,2,3,4)", "hsl(1,2%,3%)", "hsla(1,2%,3%,4)",
        "hsl(2,2,2)", "red", "happy", "RED", "rgb(1, 2, 3", "💥", "rgb(1,,2,3)", "#ggg",
    ];
    for input in inputs.iter() {
        let t = classify(input);
        assert!(ColorType::ALL.contains(&t));
    }
    assert_eq!(classify("#f"), ColorType::Unknown);
    assert_eq!(classify("happy"), ColorType::Unknown);
    assert_eq!(classify("hsl(2,2,2)"), ColorType::Unknown);
}

#[test]
fn test_output_reparses() {
    let color = Color::parse("rgba(12, 200, 99, 0.5)").unwrap();
    for &t in [ColorType::Rgba, ColorType::Hsla, ColorType::Hex2].iter() {
        let rendered = color.to_type_string(t);
        assert_eq!(classify(&rendered), t, "{}", rendered);
        let back = Color::parse(&rendered).unwrap();
        // whole-percent HSL output can move a channel by a couple of steps
        assert!((back.red() - color.red()).abs() <= 3.0, "{}", rendered);
        assert!((back.green() - color.green()).abs() <= 3.0, "{}", rendered);
        assert!((back.blue() - color.blue()).abs() <= 3.0, "{}", rendered);
    }
}

#[test]
fn test_every_keyword_hydrates() {
    for name in keywords::names() {
        assert_eq!(classify(name), ColorType::Lut, "{}", name);
        let color = Color::parse(name).unwrap();
        let expected = keywords::lookup(name).unwrap();
        assert_eq!(color.rgb(), expected, "{}", name);
        assert_eq!(color.alpha(), 1.);
    }
}

#[test]
fn test_rgb_hsl_rgb_round_trip() {
    let steps = [0., 1., 17., 63.5, 128., 200., 254., 255.];
    for &r in steps.iter() {
        for &g in steps.iter() {
            for &b in steps.iter() {
                let rgb = RGBColor { r, g, b };
                let hsl = HSLColor::from(rgb);
                assert!(hsl.h >= 0. && hsl.h < 360., "{:?}", hsl);
                assert!(hsl.s >= 0. && hsl.s <= 1., "{:?}", hsl);
                assert!(hsl.l >= 0. && hsl.l <= 1., "{:?}", hsl);
                if r == g && g == b {
                    assert_eq!(hsl.h, 0.);
                    assert_eq!(hsl.s, 0.);
                }
                let back = RGBColor::from(hsl);
                assert!((back.r - r).abs() <= 1., "{:?} -> {:?}", rgb, back);
                assert!((back.g - g).abs() <= 1., "{:?} -> {:?}", rgb, back);
                assert!((back.b - b).abs() <= 1., "{:?} -> {:?}", rgb, back);
            }
        }
    }
}

#[test]
fn test_hsl_rgb_hsl_round_trip() {
    // well inside the gamut, where a one-step channel error barely moves the HSL coordinates
    for h in (0..36).map(|i| i as f64 * 10.) {
        for &s in [0.3, 0.6, 1.0].iter() {
            for &l in [0.3, 0.5, 0.7].iter() {
                let rgb = RGBColor::from(HSLColor { h, s, l });
                let back = HSLColor::from(rgb);
                let hue_diff = (back.h - h).abs();
                assert!(hue_diff.min(360. - hue_diff) <= 2., "{} {} {} -> {:?}", h, s, l, back);
                assert!((back.s - s).abs() <= 0.02, "{} {} {} -> {:?}", h, s, l, back);
                assert!((back.l - l).abs() <= 0.01, "{} {} {} -> {:?}", h, s, l, back);
            }
        }
    }
}

#[test]
fn test_setters_keep_views_in_sync() {
    let mut color = Color::parse("hsl(200, 40%, 60%)").unwrap();
    color.set_blue(10);
    assert_eq!(HSLColor::from(color.rgb()), color.hsl());
    color.set_saturation(0.9);
    assert_eq!(RGBColor::from(color.hsl()), color.rgb());
}

#[test]
fn test_serde_round_trip() {
    let color = Color::parse("rgba(56, 38.2, 12, 0.354)").unwrap();
    let json = serde_json::to_string(&color).unwrap();
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, color);

    let tag = serde_json::to_string(&ColorType::Hex2).unwrap();
    assert_eq!(tag, "\"hexadecimal-tuple\"");
    let tag: ColorType = serde_json::from_str("\"lookup\"").unwrap();
    assert_eq!(tag, ColorType::Lut);
}

#[test]
fn test_deserialize_clamps_and_syncs() {
    let json = r#"{"rgb":{"r":300.0,"g":0.0,"b":-4.0},"hsl":{"h":999.0,"s":5.0,"l":0.0},"alpha":7.0}"#;
    let color: Color = serde_json::from_str(json).unwrap();
    assert_eq!(color.rgb(), RGBColor { r: 255., g: 0., b: 0. });
    assert_eq!(color.alpha(), 1.);
    // the serialized HSL part is replaced by the one the RGB part implies
    assert_eq!(color.hsl(), HSLColor::from(color.rgb()));
    assert_eq!(color.hue(), 0.);
    assert_eq!(color.saturation(), 1.);
    assert_eq!(color.lightness(), 0.5);
    assert_eq!(color.to_rgba_string(false), "rgba(255, 0, 0, 1)");

    let json = r#"{"rgb":{"r":10.0,"g":20.0,"b":30.0},"alpha":-0.5}"#;
    let color: Color = serde_json::from_str(json).unwrap();
    assert_eq!(color.alpha(), 0.);
    assert_eq!(color.hsl(), HSLColor::from(RGBColor { r: 10., g: 20., b: 30. }));
}
