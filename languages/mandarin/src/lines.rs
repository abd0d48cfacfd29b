/// Line translations known ahead of time, seeded into the session cache
/// so annotating the bundled lyrics issues no line-translation calls.
pub const KNOWN_LINES: &[(&str, &str)] = &[
    ("你问我爱你有多深", "You ask me how deeply I love you"),
    ("我爱你有几分", "How much of me loves you"),
    ("我的情也真", "My affection is real"),
    ("我的爱也真", "My love is real"),
    ("月亮代表我的心", "The moon represents my heart"),
    ("我的情不移", "My affection never wavers"),
    ("我的爱不变", "My love never changes"),
    ("你去想一想", "Go and think it over"),
    ("你去看一看", "Go and take a look"),
];

/// Demo lyrics annotated when no input is given
pub const SAMPLE_LYRICS: &str = "\
你问我爱你有多深
我爱你有几分
我的情也真
我的爱也真
月亮代表我的心";
