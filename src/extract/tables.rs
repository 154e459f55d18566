//! Built-in Japanese lexicon tables.
//!
//! Table order is meaningful: it is the tie-break order for names of equal
//! length and the insertion order of the keyword lists.

use super::unit::Unit;

/// Category used when nothing in the classification chain matches.
pub const DEFAULT_CATEGORY: &str = "その他";

/// Keyword lists per category, in insertion order.
pub static CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "肉",
        &[
            "牛肉", "鶏肉", "豚肉", "鶏胸肉", "鶏むね肉", "鶏もも肉", "ひき肉", "ミンチ",
            "ステーキ", "ロース", "ヒレ", "サーロイン", "チキン", "ささみ", "豚バラ", "ハム",
            "ベーコン", "ソーセージ", "ウインナー", "鮭", "サーモン", "鯖", "サバ", "マグロ",
            "ウナギ", "カツオ", "さんま", "イワシ", "アジ", "しらす", "ツナ", "魚肉",
        ],
    ),
    (
        "野菜",
        &[
            "もやし", "豆もやし", "トマト", "ニンジン", "にんじん", "人参", "キャベツ", "玉ねぎ",
            "玉葱", "たまねぎ", "きゅうり", "キュウリ", "ピーマン", "白菜", "大根", "だいこん",
            "ごぼう", "レタス", "ほうれん草", "ほうれんそう", "小松菜", "チンゲン菜", "水菜",
            "ブロッコリー", "カリフラワー", "いんげん", "ネギ", "長ネギ", "みょうが", "生姜",
            "ニンニク", "ジャガイモ", "かぼちゃ", "なす", "ナス",
        ],
    ),
    (
        "きのこ",
        &[
            "まいたけ", "マイタケ", "舞茸", "えのき", "エノキ", "しいたけ", "シイタケ",
            "しめじ", "シメジ", "なめこ", "ナメコ", "マッシュルーム", "エリンギ", "きのこ",
        ],
    ),
    (
        "乳製品",
        &[
            "牛乳", "ぎゅうにゅう", "乳製品", "チーズ", "ヨーグルト", "バター", "生クリーム",
            "クリーム", "マーガリン", "ミルク",
        ],
    ),
    (
        "穀物",
        &[
            "米", "ご飯", "ごはん", "パン", "食パン", "麺", "うどん", "そば", "スパゲッティ",
            "パスタ", "ラーメン", "そうめん", "中華麺", "小麦粉",
        ],
    ),
    (
        "調味料",
        &[
            "醤油", "しょうゆ", "味噌", "みそ", "塩", "砂糖", "さとう", "胡椒", "こしょう",
            "油", "サラダ油", "オリーブオイル", "ごま油", "酢", "みりん", "マヨネーズ",
            "ケチャップ", "ソース",
        ],
    ),
    (
        "加工食品",
        &[
            "プチッと鍋", "即席麺", "カップ麺", "冷凍食品", "鍋", "なべ", "豆腐", "納豆",
            "こんにゃく", "わかめ", "海苔", "かつお節", "インスタント", "レトルト",
            "ポテトチップス", "スナック", "菓子",
        ],
    ),
    (DEFAULT_CATEGORY, &[]),
];

/// Known food and product names with their category.
pub static FOOD_NAMES: &[(&str, &str)] = &[
    // 野菜
    ("玉ねぎ", "野菜"),
    ("たまねぎ", "野菜"),
    ("玉葱", "野菜"),
    ("ねぎ", "野菜"),
    ("長ねぎ", "野菜"),
    ("にんじん", "野菜"),
    ("人参", "野菜"),
    ("キャベツ", "野菜"),
    ("トマト", "野菜"),
    ("ミニトマト", "野菜"),
    ("きゅうり", "野菜"),
    ("ピーマン", "野菜"),
    ("なす", "野菜"),
    ("ナス", "野菜"),
    ("白菜", "野菜"),
    ("大根", "野菜"),
    ("かぼちゃ", "野菜"),
    ("ブロッコリー", "野菜"),
    ("ほうれん草", "野菜"),
    ("ほうれんそう", "野菜"),
    ("小松菜", "野菜"),
    ("レタス", "野菜"),
    ("もやし", "野菜"),
    ("ゴボウ", "野菜"),
    ("ごぼう", "野菜"),
    ("レンコン", "野菜"),
    ("れんこん", "野菜"),
    ("じゃがいも", "野菜"),
    ("さつまいも", "野菜"),
    ("さといも", "野菜"),
    ("とうもろこし", "野菜"),
    ("しょうが", "野菜"),
    ("にんにく", "野菜"),
    // 商品名・加工食品
    ("プチッと鍋", "加工食品"),
    ("プチッと", "加工食品"),
    ("プチっと鍋", "加工食品"),
    ("プチっと", "加工食品"),
    ("Puchitto Nabe", "加工食品"),
    ("チキンラーメン", "加工食品"),
    ("カップヌードル", "加工食品"),
    ("インスタントラーメン", "加工食品"),
    ("豆腐", "加工食品"),
    ("とうふ", "加工食品"),
    ("納豆", "加工食品"),
    ("こんにゃく", "加工食品"),
    ("わかめ", "加工食品"),
    ("のり", "加工食品"),
    ("海苔", "加工食品"),
    // きのこ
    ("しいたけ", "きのこ"),
    ("まいたけ", "きのこ"),
    ("えのき", "きのこ"),
    ("しめじ", "きのこ"),
    ("エリンギ", "きのこ"),
    ("マッシュルーム", "きのこ"),
    // 肉・魚
    ("鶏肉", "肉"),
    ("牛肉", "肉"),
    ("豚肉", "肉"),
    ("ひき肉", "肉"),
    ("鶏むね肉", "肉"),
    ("鶏もも肉", "肉"),
    ("ハム", "肉"),
    ("ベーコン", "肉"),
    ("ソーセージ", "肉"),
    ("ウインナー", "肉"),
    ("鮭", "肉"),
    ("サバ", "肉"),
    // 乳製品
    ("牛乳", "乳製品"),
    ("ヨーグルト", "乳製品"),
    ("チーズ", "乳製品"),
    ("バター", "乳製品"),
    ("生クリーム", "乳製品"),
    // 穀物
    ("米", "穀物"),
    ("ご飯", "穀物"),
    ("食パン", "穀物"),
    ("うどん", "穀物"),
    ("パスタ", "穀物"),
    // 調味料
    ("醤油", "調味料"),
    ("味噌", "調味料"),
    ("マヨネーズ", "調味料"),
    ("ケチャップ", "調味料"),
];

/// High-priority overrides for short or ambiguous tokens.
pub static SPECIAL_MATCHES: &[(&str, &str)] = &[
    ("牛乳", "乳製品"),
    ("ぎゅうにゅう", "乳製品"),
    ("ミルク", "乳製品"),
    ("チーズ", "乳製品"),
    ("ヨーグルト", "乳製品"),
    ("牛肉", "肉"),
    ("鶏肉", "肉"),
    ("豚肉", "肉"),
    ("Puchitto Nabe", "加工食品"),
    ("プチッと鍋", "加工食品"),
    ("プチっと鍋", "加工食品"),
    ("プチッと", "加工食品"),
    ("プチっと", "加工食品"),
];

/// Native number words, optionally carrying the counter they imply.
pub static NUMBER_WORDS: &[(&str, u32, Option<Unit>)] = &[
    // Native counting forms
    ("ひとつ", 1, None),
    ("ふたつ", 2, None),
    ("みっつ", 3, None),
    ("よっつ", 4, None),
    ("いつつ", 5, None),
    ("むっつ", 6, None),
    ("ななつ", 7, None),
    ("やっつ", 8, None),
    ("ここのつ", 9, None),
    ("とお", 10, None),
    ("一つ", 1, None),
    ("二つ", 2, None),
    ("三つ", 3, None),
    ("四つ", 4, None),
    ("五つ", 5, None),
    ("六つ", 6, None),
    ("七つ", 7, None),
    ("八つ", 8, None),
    ("九つ", 9, None),
    // Bare kanji numerals
    ("一", 1, None),
    ("二", 2, None),
    ("三", 3, None),
    ("四", 4, None),
    ("五", 5, None),
    ("六", 6, None),
    ("七", 7, None),
    ("八", 8, None),
    ("九", 9, None),
    ("十", 10, None),
    // Counter-fused readings
    ("いっこ", 1, Some(Unit::Piece)),
    ("にこ", 2, Some(Unit::Piece)),
    ("さんこ", 3, Some(Unit::Piece)),
    ("よんこ", 4, Some(Unit::Piece)),
    ("ごこ", 5, Some(Unit::Piece)),
    ("いっぽん", 1, Some(Unit::Stick)),
    ("にほん", 2, Some(Unit::Stick)),
    ("さんぼん", 3, Some(Unit::Stick)),
    ("いちまい", 1, Some(Unit::Sheet)),
    ("にまい", 2, Some(Unit::Sheet)),
    ("さんまい", 3, Some(Unit::Sheet)),
    ("ひとパック", 1, Some(Unit::Pack)),
    ("ふたパック", 2, Some(Unit::Pack)),
    ("ひとふくろ", 1, Some(Unit::Bag)),
    ("ふたふくろ", 2, Some(Unit::Bag)),
];

/// Colloquial fillers treated as a comma ("牛乳とか卵" → "牛乳、卵").
pub static FILLERS: &[&str] = &["とか", "なんか", "など"];
