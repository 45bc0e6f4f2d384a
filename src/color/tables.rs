//! Static ANSI 256 color name tables.
//!
//! Both tables are sorted so lookups can binary search.

/// ANSI 256 color numbers and their canonical names, sorted by number.
///
/// Numbers missing from this table have no name and are rejected by
/// [`crate::color::ansi_name`].
pub const ANSI_COLORS: &[(u8, &str)] = &[
    (0, "black"), (1, "red"), (2, "green"), (3, "yellow"), (4, "blue"), (5, "magenta"),
    (6, "cyan"), (7, "white"), (8, "bright_black"), (9, "bright_red"), (10, "bright_green"),
    (11, "bright_yellow"), (12, "bright_blue"), (13, "bright_magenta"), (14, "bright_cyan"),
    (15, "bright_white"), (16, "gray0"), (17, "navy_blue"), (18, "dark_blue"), (20, "blue3"),
    (21, "blue1"), (22, "dark_green"), (25, "deep_sky_blue4"), (26, "dodger_blue3"),
    (27, "dodger_blue2"), (28, "green4"), (29, "spring_green4"), (30, "turquoise4"),
    (32, "deep_sky_blue3"), (33, "dodger_blue1"), (36, "dark_cyan"), (37, "light_sea_green"),
    (38, "deep_sky_blue2"), (39, "deep_sky_blue1"), (40, "green3"), (41, "spring_green3"),
    (43, "cyan3"), (44, "dark_turquoise"), (45, "turquoise2"), (46, "green1"),
    (47, "spring_green2"), (48, "spring_green1"), (49, "medium_spring_green"), (50, "cyan2"),
    (51, "cyan1"), (55, "purple4"), (56, "purple3"), (57, "blue_violet"), (59, "gray37"),
    (60, "medium_purple4"), (62, "slate_blue3"), (63, "royal_blue1"), (64, "chartreuse4"),
    (66, "pale_turquoise4"), (67, "steel_blue"), (68, "steel_blue3"), (69, "cornflower_blue"),
    (71, "dark_sea_green4"), (73, "cadet_blue"), (74, "sky_blue3"), (76, "chartreuse3"),
    (78, "sea_green3"), (79, "aquamarine3"), (80, "medium_turquoise"), (81, "steel_blue1"),
    (83, "sea_green2"), (85, "sea_green1"), (87, "dark_slate_gray2"), (88, "dark_red"),
    (91, "dark_magenta"), (94, "orange4"), (95, "light_pink4"), (96, "plum4"),
    (98, "medium_purple3"), (99, "slate_blue1"), (101, "wheat4"), (102, "gray53"),
    (103, "light_slate_gray"), (104, "medium_purple"), (105, "light_slate_blue"), (106, "yellow4"),
    (108, "dark_sea_green"), (110, "light_sky_blue3"), (111, "sky_blue2"), (112, "chartreuse2"),
    (114, "pale_green3"), (116, "dark_slate_gray3"), (117, "sky_blue1"), (118, "chartreuse1"),
    (120, "light_green"), (122, "aquamarine1"), (123, "dark_slate_gray1"), (125, "deep_pink4"),
    (126, "medium_violet_red"), (128, "dark_violet"), (129, "purple"), (133, "medium_orchid3"),
    (134, "medium_orchid"), (136, "dark_goldenrod"), (138, "rosy_brown"), (139, "gray63"),
    (140, "medium_purple2"), (141, "medium_purple1"), (143, "dark_khaki"), (144, "navajo_white3"),
    (145, "gray69"), (146, "light_steel_blue3"), (147, "light_steel_blue"),
    (149, "dark_olive_green3"), (150, "dark_sea_green3"), (152, "light_cyan3"),
    (153, "light_sky_blue1"), (154, "green_yellow"), (155, "dark_olive_green2"),
    (156, "pale_green1"), (157, "dark_sea_green2"), (159, "pale_turquoise1"), (160, "red3"),
    (162, "deep_pink3"), (164, "magenta3"), (166, "dark_orange3"), (167, "indian_red"),
    (168, "hot_pink3"), (169, "hot_pink2"), (170, "orchid"), (172, "orange3"),
    (173, "light_salmon3"), (174, "light_pink3"), (175, "pink3"), (176, "plum3"), (177, "violet"),
    (178, "gold3"), (179, "light_goldenrod3"), (180, "tan"), (181, "misty_rose3"),
    (182, "thistle3"), (183, "plum2"), (184, "yellow3"), (185, "khaki3"), (187, "light_yellow3"),
    (188, "gray84"), (189, "light_steel_blue1"), (190, "yellow2"), (192, "dark_olive_green1"),
    (193, "dark_sea_green1"), (194, "honeydew2"), (195, "light_cyan1"), (196, "red1"),
    (197, "deep_pink2"), (199, "deep_pink1"), (200, "magenta2"), (201, "magenta1"),
    (202, "orange_red1"), (204, "indian_red1"), (206, "hot_pink"), (207, "medium_orchid1"),
    (208, "dark_orange"), (209, "salmon1"), (210, "light_coral"), (211, "pale_violet_red1"),
    (212, "orchid2"), (213, "orchid1"), (214, "orange1"), (215, "sandy_brown"),
    (216, "light_salmon1"), (217, "light_pink1"), (218, "pink1"), (219, "plum1"), (220, "gold1"),
    (222, "light_goldenrod2"), (223, "navajo_white1"), (224, "misty_rose1"), (225, "thistle1"),
    (226, "yellow1"), (227, "light_goldenrod1"), (228, "khaki1"), (229, "wheat1"),
    (230, "cornsilk1"), (231, "gray100"), (232, "gray3"), (233, "gray7"), (234, "gray11"),
    (235, "gray15"), (236, "gray19"), (237, "gray23"), (238, "gray27"), (239, "gray30"),
    (240, "gray35"), (241, "gray39"), (242, "gray42"), (243, "gray46"), (244, "gray50"),
    (245, "gray54"), (246, "gray58"), (247, "gray62"), (248, "gray66"), (249, "gray70"),
    (250, "gray74"), (251, "gray78"), (252, "gray82"), (253, "gray85"), (254, "gray89"),
    (255, "gray93"),
];

/// Color names (including `grey*` aliases) and their ANSI numbers, sorted by name.
pub const COLORS_ANSI: &[(&str, u8)] = &[
    ("aquamarine1", 122), ("aquamarine3", 79), ("black", 0), ("blue", 4), ("blue1", 21),
    ("blue3", 20), ("blue_violet", 57), ("bright_black", 8), ("bright_blue", 12),
    ("bright_cyan", 14), ("bright_green", 10), ("bright_magenta", 13), ("bright_red", 9),
    ("bright_white", 15), ("bright_yellow", 11), ("cadet_blue", 73), ("chartreuse1", 118),
    ("chartreuse2", 112), ("chartreuse3", 76), ("chartreuse4", 64), ("cornflower_blue", 69),
    ("cornsilk1", 230), ("cyan", 6), ("cyan1", 51), ("cyan2", 50), ("cyan3", 43),
    ("dark_blue", 18), ("dark_cyan", 36), ("dark_goldenrod", 136), ("dark_green", 22),
    ("dark_khaki", 143), ("dark_magenta", 91), ("dark_olive_green1", 192),
    ("dark_olive_green2", 155), ("dark_olive_green3", 149), ("dark_orange", 208),
    ("dark_orange3", 166), ("dark_red", 88), ("dark_sea_green", 108), ("dark_sea_green1", 193),
    ("dark_sea_green2", 157), ("dark_sea_green3", 150), ("dark_sea_green4", 71),
    ("dark_slate_gray1", 123), ("dark_slate_gray2", 87), ("dark_slate_gray3", 116),
    ("dark_turquoise", 44), ("dark_violet", 128), ("deep_pink1", 199), ("deep_pink2", 197),
    ("deep_pink3", 162), ("deep_pink4", 125), ("deep_sky_blue1", 39), ("deep_sky_blue2", 38),
    ("deep_sky_blue3", 32), ("deep_sky_blue4", 25), ("dodger_blue1", 33), ("dodger_blue2", 27),
    ("dodger_blue3", 26), ("gold1", 220), ("gold3", 178), ("gray0", 16), ("gray100", 231),
    ("gray11", 234), ("gray15", 235), ("gray19", 236), ("gray23", 237), ("gray27", 238),
    ("gray3", 232), ("gray30", 239), ("gray35", 240), ("gray37", 59), ("gray39", 241),
    ("gray42", 242), ("gray46", 243), ("gray50", 244), ("gray53", 102), ("gray54", 245),
    ("gray58", 246), ("gray62", 247), ("gray63", 139), ("gray66", 248), ("gray69", 145),
    ("gray7", 233), ("gray70", 249), ("gray74", 250), ("gray78", 251), ("gray82", 252),
    ("gray84", 188), ("gray85", 253), ("gray89", 254), ("gray93", 255), ("green", 2),
    ("green1", 46), ("green3", 40), ("green4", 28), ("green_yellow", 154), ("grey0", 16),
    ("grey100", 231), ("grey11", 234), ("grey15", 235), ("grey19", 236), ("grey23", 237),
    ("grey27", 238), ("grey3", 232), ("grey30", 239), ("grey35", 240), ("grey37", 59),
    ("grey39", 241), ("grey42", 242), ("grey46", 243), ("grey50", 244), ("grey53", 102),
    ("grey54", 245), ("grey58", 246), ("grey62", 247), ("grey63", 139), ("grey66", 248),
    ("grey69", 145), ("grey7", 233), ("grey70", 249), ("grey74", 250), ("grey78", 251),
    ("grey82", 252), ("grey84", 188), ("grey85", 253), ("grey89", 254), ("grey93", 255),
    ("honeydew2", 194), ("hot_pink", 206), ("hot_pink2", 169), ("hot_pink3", 168),
    ("indian_red", 167), ("indian_red1", 204), ("khaki1", 228), ("khaki3", 185),
    ("light_coral", 210), ("light_cyan1", 195), ("light_cyan3", 152), ("light_goldenrod1", 227),
    ("light_goldenrod2", 222), ("light_goldenrod3", 179), ("light_green", 120),
    ("light_pink1", 217), ("light_pink3", 174), ("light_pink4", 95), ("light_salmon1", 216),
    ("light_salmon3", 173), ("light_sea_green", 37), ("light_sky_blue1", 153),
    ("light_sky_blue3", 110), ("light_slate_blue", 105), ("light_slate_gray", 103),
    ("light_slate_grey", 103), ("light_steel_blue", 147), ("light_steel_blue1", 189),
    ("light_steel_blue3", 146), ("light_yellow3", 187), ("magenta", 5), ("magenta1", 201),
    ("magenta2", 200), ("magenta3", 164), ("medium_orchid", 134), ("medium_orchid1", 207),
    ("medium_orchid3", 133), ("medium_purple", 104), ("medium_purple1", 141),
    ("medium_purple2", 140), ("medium_purple3", 98), ("medium_purple4", 60),
    ("medium_spring_green", 49), ("medium_turquoise", 80), ("medium_violet_red", 126),
    ("misty_rose1", 224), ("misty_rose3", 181), ("navajo_white1", 223), ("navajo_white3", 144),
    ("navy_blue", 17), ("orange1", 214), ("orange3", 172), ("orange4", 94), ("orange_red1", 202),
    ("orchid", 170), ("orchid1", 213), ("orchid2", 212), ("pale_green1", 156),
    ("pale_green3", 114), ("pale_turquoise1", 159), ("pale_turquoise4", 66),
    ("pale_violet_red1", 211), ("pink1", 218), ("pink3", 175), ("plum1", 219), ("plum2", 183),
    ("plum3", 176), ("plum4", 96), ("purple", 129), ("purple3", 56), ("purple4", 55), ("red", 1),
    ("red1", 196), ("red3", 160), ("rosy_brown", 138), ("royal_blue1", 63), ("salmon1", 209),
    ("sandy_brown", 215), ("sea_green1", 85), ("sea_green2", 83), ("sea_green3", 78),
    ("sky_blue1", 117), ("sky_blue2", 111), ("sky_blue3", 74), ("slate_blue1", 99),
    ("slate_blue3", 62), ("spring_green1", 48), ("spring_green2", 47), ("spring_green3", 41),
    ("spring_green4", 29), ("steel_blue", 67), ("steel_blue1", 81), ("steel_blue3", 68),
    ("tan", 180), ("thistle1", 225), ("thistle3", 182), ("turquoise2", 45), ("turquoise4", 30),
    ("violet", 177), ("wheat1", 229), ("wheat4", 101), ("white", 7), ("yellow", 3),
    ("yellow1", 226), ("yellow2", 190), ("yellow3", 184), ("yellow4", 106),
];

/// Look up the canonical name for an ANSI color number.
pub fn ansi_name(number: u8) -> Option<&'static str> {
    ANSI_COLORS
        .binary_search_by_key(&number, |(n, _)| *n)
        .ok()
        .map(|i| ANSI_COLORS[i].1)
}

/// Look up the ANSI number for a color name. Accepts `grey` and `gray` spellings.
pub fn ansi_number(name: &str) -> Option<u8> {
    COLORS_ANSI
        .binary_search_by(|(n, _)| (*n).cmp(name))
        .ok()
        .map(|i| COLORS_ANSI[i].1)
}

/// Whether the number has an entry in the ANSI table.
pub fn valid_ansi_number(number: u8) -> bool {
    ansi_name(number).is_some()
}

/// Whether the name is a known W3/ANSI color name.
pub fn valid_w3(name: &str) -> bool {
    ansi_number(name).is_some()
}
