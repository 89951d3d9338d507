//! This file holds the CSS extended color keywords, the 147 names like `chocolate` and
//! `lightgoldenrodyellow` that CSS accepts in place of a numeric color, and their sRGB values. The
//! values are the ones given in the CSS Color Module Level 3 keyword table. Both the American
//! `gray` and British `grey` spellings are present.

use std::collections::HashMap;

use colors::RGBColor;

lazy_static! {
    // keyed by lowercase name
    static ref KEYWORDS: HashMap<&'static str, RGBColor> = hashmap! {
        "aliceblue" => RGBColor { r: 240., g: 248., b: 255. },
        "antiquewhite" => RGBColor { r: 250., g: 235., b: 215. },
        "aqua" => RGBColor { r: 0., g: 255., b: 255. },
        "aquamarine" => RGBColor { r: 127., g: 255., b: 212. },
        "azure" => RGBColor { r: 240., g: 255., b: 255. },
        "beige" => RGBColor { r: 245., g: 245., b: 220. },
        "bisque" => RGBColor { r: 255., g: 228., b: 196. },
        "black" => RGBColor { r: 0., g: 0., b: 0. },
        "blanchedalmond" => RGBColor { r: 255., g: 235., b: 205. },
        "blue" => RGBColor { r: 0., g: 0., b: 255. },
        "blueviolet" => RGBColor { r: 138., g: 43., b: 226. },
        "brown" => RGBColor { r: 165., g: 42., b: 42. },
        "burlywood" => RGBColor { r: 222., g: 184., b: 135. },
        "cadetblue" => RGBColor { r: 95., g: 158., b: 160. },
        "chartreuse" => RGBColor { r: 127., g: 255., b: 0. },
        "chocolate" => RGBColor { r: 210., g: 105., b: 30. },
        "coral" => RGBColor { r: 255., g: 127., b: 80. },
        "cornflowerblue" => RGBColor { r: 100., g: 149., b: 237. },
        "cornsilk" => RGBColor { r: 255., g: 248., b: 220. },
        "crimson" => RGBColor { r: 220., g: 20., b: 60. },
        "cyan" => RGBColor { r: 0., g: 255., b: 255. },
        "darkblue" => RGBColor { r: 0., g: 0., b: 139. },
        "darkcyan" => RGBColor { r: 0., g: 139., b: 139. },
        "darkgoldenrod" => RGBColor { r: 184., g: 134., b: 11. },
        "darkgray" => RGBColor { r: 169., g: 169., b: 169. },
        "darkgreen" => RGBColor { r: 0., g: 100., b: 0. },
        "darkgrey" => RGBColor { r: 169., g: 169., b: 169. },
        "darkkhaki" => RGBColor { r: 189., g: 183., b: 107. },
        "darkmagenta" => RGBColor { r: 139., g: 0., b: 139. },
        "darkolivegreen" => RGBColor { r: 85., g: 107., b: 47. },
        "darkorange" => RGBColor { r: 255., g: 140., b: 0. },
        "darkorchid" => RGBColor { r: 153., g: 50., b: 204. },
        "darkred" => RGBColor { r: 139., g: 0., b: 0. },
        "darksalmon" => RGBColor { r: 233., g: 150., b: 122. },
        "darkseagreen" => RGBColor { r: 143., g: 188., b: 143. },
        "darkslateblue" => RGBColor { r: 72., g: 61., b: 139. },
        "darkslategray" => RGBColor { r: 47., g: 79., b: 79. },
        "darkslategrey" => RGBColor { r: 47., g: 79., b: 79. },
        "darkturquoise" => RGBColor { r: 0., g: 206., b: 209. },
        "darkviolet" => RGBColor { r: 148., g: 0., b: 211. },
        "deeppink" => RGBColor { r: 255., g: 20., b: 147. },
        "deepskyblue" => RGBColor { r: 0., g: 191., b: 255. },
        "dimgray" => RGBColor { r: 105., g: 105., b: 105. },
        "dimgrey" => RGBColor { r: 105., g: 105., b: 105. },
        "dodgerblue" => RGBColor { r: 30., g: 144., b: 255. },
        "firebrick" => RGBColor { r: 178., g: 34., b: 34. },
        "floralwhite" => RGBColor { r: 255., g: 250., b: 240. },
        "forestgreen" => RGBColor { r: 34., g: 139., b: 34. },
        "fuchsia" => RGBColor { r: 255., g: 0., b: 255. },
        "gainsboro" => RGBColor { r: 220., g: 220., b: 220. },
        "ghostwhite" => RGBColor { r: 248., g: 248., b: 255. },
        "gold" => RGBColor { r: 255., g: 215., b: 0. },
        "goldenrod" => RGBColor { r: 218., g: 165., b: 32. },
        "gray" => RGBColor { r: 128., g: 128., b: 128. },
        "green" => RGBColor { r: 0., g: 128., b: 0. },
        "greenyellow" => RGBColor { r: 173., g: 255., b: 47. },
        "grey" => RGBColor { r: 128., g: 128., b: 128. },
        "honeydew" => RGBColor { r: 240., g: 255., b: 240. },
        "hotpink" => RGBColor { r: 255., g: 105., b: 180. },
        "indianred" => RGBColor { r: 205., g: 92., b: 92. },
        "indigo" => RGBColor { r: 75., g: 0., b: 130. },
        "ivory" => RGBColor { r: 255., g: 255., b: 240. },
        "khaki" => RGBColor { r: 240., g: 230., b: 140. },
        "lavender" => RGBColor { r: 230., g: 230., b: 250. },
        "lavenderblush" => RGBColor { r: 255., g: 240., b: 245. },
        "lawngreen" => RGBColor { r: 124., g: 252., b: 0. },
        "lemonchiffon" => RGBColor { r: 255., g: 250., b: 205. },
        "lightblue" => RGBColor { r: 173., g: 216., b: 230. },
        "lightcoral" => RGBColor { r: 240., g: 128., b: 128. },
        "lightcyan" => RGBColor { r: 224., g: 255., b: 255. },
        "lightgoldenrodyellow" => RGBColor { r: 250., g: 250., b: 210. },
        "lightgray" => RGBColor { r: 211., g: 211., b: 211. },
        "lightgreen" => RGBColor { r: 144., g: 238., b: 144. },
        "lightgrey" => RGBColor { r: 211., g: 211., b: 211. },
        "lightpink" => RGBColor { r: 255., g: 182., b: 193. },
        "lightsalmon" => RGBColor { r: 255., g: 160., b: 122. },
        "lightseagreen" => RGBColor { r: 32., g: 178., b: 170. },
        "lightskyblue" => RGBColor { r: 135., g: 206., b: 250. },
        "lightslategray" => RGBColor { r: 119., g: 136., b: 153. },
        "lightslategrey" => RGBColor { r: 119., g: 136., b: 153. },
        "lightsteelblue" => RGBColor { r: 176., g: 196., b: 222. },
        "lightyellow" => RGBColor { r: 255., g: 255., b: 224. },
        "lime" => RGBColor { r: 0., g: 255., b: 0. },
        "limegreen" => RGBColor { r: 50., g: 205., b: 50. },
        "linen" => RGBColor { r: 250., g: 240., b: 230. },
        "magenta" => RGBColor { r: 255., g: 0., b: 255. },
        "maroon" => RGBColor { r: 128., g: 0., b: 0. },
        "mediumaquamarine" => RGBColor { r: 102., g: 205., b: 170. },
        "mediumblue" => RGBColor { r: 0., g: 0., b: 205. },
        "mediumorchid" => RGBColor { r: 186., g: 85., b: 211. },
        "mediumpurple" => RGBColor { r: 147., g: 112., b: 219. },
        "mediumseagreen" => RGBColor { r: 60., g: 179., b: 113. },
        "mediumslateblue" => RGBColor { r: 123., g: 104., b: 238. },
        "mediumspringgreen" => RGBColor { r: 0., g: 250., b: 154. },
        "mediumturquoise" => RGBColor { r: 72., g: 209., b: 204. },
        "mediumvioletred" => RGBColor { r: 199., g: 21., b: 133. },
        "midnightblue" => RGBColor { r: 25., g: 25., b: 112. },
        "mintcream" => RGBColor { r: 245., g: 255., b: 250. },
        "mistyrose" => RGBColor { r: 255., g: 228., b: 225. },
        "moccasin" => RGBColor { r: 255., g: 228., b: 181. },
        "navajowhite" => RGBColor { r: 255., g: 222., b: 173. },
        "navy" => RGBColor { r: 0., g: 0., b: 128. },
        "oldlace" => RGBColor { r: 253., g: 245., b: 230. },
        "olive" => RGBColor { r: 128., g: 128., b: 0. },
        "olivedrab" => RGBColor { r: 107., g: 142., b: 35. },
        "orange" => RGBColor { r: 255., g: 165., b: 0. },
        "orangered" => RGBColor { r: 255., g: 69., b: 0. },
        "orchid" => RGBColor { r: 218., g: 112., b: 214. },
        "palegoldenrod" => RGBColor { r: 238., g: 232., b: 170. },
        "palegreen" => RGBColor { r: 152., g: 251., b: 152. },
        "paleturquoise" => RGBColor { r: 175., g: 238., b: 238. },
        "palevioletred" => RGBColor { r: 219., g: 112., b: 147. },
        "papayawhip" => RGBColor { r: 255., g: 239., b: 213. },
        "peachpuff" => RGBColor { r: 255., g: 218., b: 185. },
        "peru" => RGBColor { r: 205., g: 133., b: 63. },
        "pink" => RGBColor { r: 255., g: 192., b: 203. },
        "plum" => RGBColor { r: 221., g: 160., b: 221. },
        "powderblue" => RGBColor { r: 176., g: 224., b: 230. },
        "purple" => RGBColor { r: 128., g: 0., b: 128. },
        "red" => RGBColor { r: 255., g: 0., b: 0. },
        "rosybrown" => RGBColor { r: 188., g: 143., b: 143. },
        "royalblue" => RGBColor { r: 65., g: 105., b: 225. },
        "saddlebrown" => RGBColor { r: 139., g: 69., b: 19. },
        "salmon" => RGBColor { r: 250., g: 128., b: 114. },
        "sandybrown" => RGBColor { r: 244., g: 164., b: 96. },
        "seagreen" => RGBColor { r: 46., g: 139., b: 87. },
        "seashell" => RGBColor { r: 255., g: 245., b: 238. },
        "sienna" => RGBColor { r: 160., g: 82., b: 45. },
        "silver" => RGBColor { r: 192., g: 192., b: 192. },
        "skyblue" => RGBColor { r: 135., g: 206., b: 235. },
        "slateblue" => RGBColor { r: 106., g: 90., b: 205. },
        "slategray" => RGBColor { r: 112., g: 128., b: 144. },
        "slategrey" => RGBColor { r: 112., g: 128., b: 144. },
        "snow" => RGBColor { r: 255., g: 250., b: 250. },
        "springgreen" => RGBColor { r: 0., g: 255., b: 127. },
        "steelblue" => RGBColor { r: 70., g: 130., b: 180. },
        "tan" => RGBColor { r: 210., g: 180., b: 140. },
        "teal" => RGBColor { r: 0., g: 128., b: 128. },
        "thistle" => RGBColor { r: 216., g: 191., b: 216. },
        "tomato" => RGBColor { r: 255., g: 99., b: 71. },
        "turquoise" => RGBColor { r: 64., g: 224., b: 208. },
        "violet" => RGBColor { r: 238., g: 130., b: 238. },
        "wheat" => RGBColor { r: 245., g: 222., b: 179. },
        "white" => RGBColor { r: 255., g: 255., b: 255. },
        "whitesmoke" => RGBColor { r: 245., g: 245., b: 245. },
        "yellow" => RGBColor { r: 255., g: 255., b: 0. },
        "yellowgreen" => RGBColor { r: 154., g: 205., b: 50. },
    };
}

/// Gets the sRGB value of a CSS color keyword. Matching ignores ASCII case, so `"Chocolate"` and
/// `"chocolate"` give the same color; anything not in the table gives `None`.
pub fn lookup(name: &str) -> Option<RGBColor> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        KEYWORDS.get(name.to_ascii_lowercase().as_str()).cloned()
    } else {
        KEYWORDS.get(name).cloned()
    }
}

/// Returns `true` if the given name is a CSS color keyword, ignoring ASCII case.
pub fn is_keyword(name: &str) -> bool {
    lookup(name).is_some()
}

/// Every keyword in the table, in alphabetical order.
pub fn names() -> impl Iterator<Item = &'static str> {
    let mut names: Vec<&'static str> = KEYWORDS.keys().cloned().collect();
    names.sort();
    names.into_iter()
}
