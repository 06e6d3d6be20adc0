//! Built-in HSK vocabulary, grouped by level.

pub(crate) type RawEntry = (char, &'static str, &'static str);

pub(crate) const HSK: &[(u8, &[RawEntry])] = &[(1, HSK_1), (2, HSK_2), (3, HSK_3)];

const HSK_1: &[RawEntry] = &[
    ('你', "nǐ", "you"),
    ('好', "hǎo", "good"),
    ('我', "wǒ", "I, me"),
    ('是', "shì", "to be"),
    ('不', "bù", "not"),
    ('人', "rén", "person"),
    ('大', "dà", "big"),
    ('小', "xiǎo", "small"),
    ('中', "zhōng", "middle"),
    ('国', "guó", "country"),
    ('一', "yī", "one"),
    ('二', "èr", "two"),
    ('三', "sān", "three"),
    ('十', "shí", "ten"),
    ('口', "kǒu", "mouth"),
    ('日', "rì", "sun, day"),
    ('月', "yuè", "moon, month"),
    ('水', "shuǐ", "water"),
    ('火', "huǒ", "fire"),
    ('山', "shān", "mountain"),
    ('上', "shàng", "up, above"),
    ('下', "xià", "down, below"),
    ('天', "tiān", "sky, day"),
    ('家', "jiā", "home, family"),
    ('学', "xué", "to study"),
    ('生', "shēng", "to be born"),
    ('爱', "ài", "love"),
    ('猫', "māo", "cat"),
    ('狗', "gǒu", "dog"),
    ('茶', "chá", "tea"),
];

const HSK_2: &[RawEntry] = &[
    ('走', "zǒu", "to walk"),
    ('跑', "pǎo", "to run"),
    ('高', "gāo", "tall, high"),
    ('长', "cháng", "long"),
    ('白', "bái", "white"),
    ('红', "hóng", "red"),
    ('黑', "hēi", "black"),
    ('新', "xīn", "new"),
    ('快', "kuài", "fast"),
    ('慢', "màn", "slow"),
    ('远', "yuǎn", "far"),
    ('近', "jìn", "near"),
    ('门', "mén", "door"),
    ('手', "shǒu", "hand"),
    ('目', "mù", "eye"),
    ('鱼', "yú", "fish"),
    ('雨', "yǔ", "rain"),
    ('雪', "xuě", "snow"),
    ('问', "wèn", "to ask"),
    ('笑', "xiào", "to laugh"),
];

const HSK_3: &[RawEntry] = &[
    ('春', "chūn", "spring"),
    ('夏', "xià", "summer"),
    ('秋', "qiū", "autumn"),
    ('冬', "dōng", "winter"),
    ('风', "fēng", "wind"),
    ('花', "huā", "flower"),
    ('草', "cǎo", "grass"),
    ('树', "shù", "tree"),
    ('鸟', "niǎo", "bird"),
    ('马', "mǎ", "horse"),
    ('牛', "niú", "cow"),
    ('羊', "yáng", "sheep"),
    ('河', "hé", "river"),
    ('海', "hǎi", "sea"),
    ('云', "yún", "cloud"),
    ('星', "xīng", "star"),
    ('心', "xīn", "heart"),
    ('城', "chéng", "city"),
    ('音', "yīn", "sound"),
    ('乐', "lè", "happy"),
];
