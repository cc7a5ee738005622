use crate::types::{Dua, Hadith};

pub const SITE_TITLE: &str = "الموقع الإسلامي";
pub const SITE_TAGLINE: &str = "دليلك للعبادة والذكر";
pub const FOOTER_VERSE: &str = "وَمَا خَلَقْتُ الْجِنَّ وَالْإِنسَ إِلَّا لِيَعْبُدُونِ";

pub const BASMALA: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";
pub const FATIHA_EXCERPT: &str =
    "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ ﴿١﴾ الرَّحْمَٰنِ الرَّحِيمِ ﴿٢﴾ مَالِكِ يَوْمِ الدِّينِ ﴿٣﴾";
pub const FATIHA_TITLE: &str = "سورة الفاتحة";

pub const SURAH_SHORTCUTS: [&str; 8] = [
    "البقرة",
    "آل عمران",
    "النساء",
    "المائدة",
    "الأنعام",
    "الأعراف",
    "الأنفال",
    "التوبة",
];

pub const AHADITH: [Hadith; 3] = [
    Hadith {
        text: "إنما الأعمال بالنيات وإنما لكل امرئ ما نوى",
        narrator: "رواه البخاري ومسلم",
    },
    Hadith {
        text: "من كان يؤمن بالله واليوم الآخر فليقل خيراً أو ليصمت",
        narrator: "رواه البخاري ومسلم",
    },
    Hadith {
        text: "المؤمن للمؤمن كالبنيان يشد بعضه بعضاً",
        narrator: "رواه البخاري ومسلم",
    },
];

pub const DUAS: [Dua; 3] = [
    Dua {
        arabic: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
        translation: "ربنا آتنا في الدنيا حسنة وفي الآخرة حسنة وقنا عذاب النار",
    },
    Dua {
        arabic: "رَبِّ اشْرَحْ لِي صَدْرِي وَيَسِّرْ لِي أَمْرِي",
        translation: "رب اشرح لي صدري ويسر لي أمري",
    },
    Dua {
        arabic: "اللَّهُمَّ أَعِنِّي عَلَى ذِكْرِكَ وَشُكْرِكَ وَحُسْنِ عِبَادَتِكَ",
        translation: "اللهم أعني على ذكرك وشكرك وحسن عبادتك",
    },
];

pub const ASMA_AL_HUSNA: [&str; 16] = [
    "الرحمن",
    "الرحيم",
    "الملك",
    "القدوس",
    "السلام",
    "المؤمن",
    "المهيمن",
    "العزيز",
    "الجبار",
    "المتكبر",
    "الخالق",
    "البارئ",
    "المصور",
    "الغفار",
    "القهار",
    "الوهاب",
];

/// Names paired with their 1-based position in the grid.
pub fn numbered_names() -> impl Iterator<Item = (usize, &'static str)> {
    ASMA_AL_HUSNA.iter().enumerate().map(|(i, &name)| (i + 1, name))
}
