//! The phrase library - every piece of pattern-keyed report content.
//!
//! One table type owns all section content, keyed by the closed pattern
//! and domain enums, so adding a pattern without its content is a
//! compile-time error in the defaults below. The library is built once,
//! read-only afterwards, and injected into the composer; it is also the
//! surface the PDF-export collaborator reads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::pattern::PatternName;
use crate::domain::quiz::LifeDomain;
use crate::domain::scoring::Driver;

use super::RelationshipStatus;

/// Challenge/benefit text for one pattern in one life area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAreaEntry {
    pub challenge: String,
    pub benefit: String,
}

/// Release/anchor phrasing for the workbook prompts of one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookPhrases {
    pub release_phrase: String,
    pub anchor_phrase: String,
}

/// Optional content overrides loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseOverrides {
    pub life_areas: BTreeMap<PatternName, BTreeMap<LifeDomain, LifeAreaEntry>>,
    pub workbook: BTreeMap<PatternName, WorkbookPhrases>,
}

impl PhraseOverrides {
    /// Parses overrides from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// The complete Section x Pattern content table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseLibrary {
    life_areas: BTreeMap<(PatternName, LifeDomain), LifeAreaEntry>,
    workbook: BTreeMap<PatternName, WorkbookPhrases>,
}

/// Process-wide default library, built once on first use.
static DEFAULT_LIBRARY: Lazy<PhraseLibrary> = Lazy::new(PhraseLibrary::built_in);

impl PhraseLibrary {
    /// Returns the process-wide default library.
    pub fn default_library() -> &'static PhraseLibrary {
        &DEFAULT_LIBRARY
    }

    /// Builds the built-in library from the canonical tables.
    pub fn built_in() -> Self {
        let mut life_areas = BTreeMap::new();
        for pattern in PatternName::all() {
            for domain in LifeDomain::all() {
                let (challenge, benefit) = life_area_defaults(*pattern, *domain);
                life_areas.insert(
                    (*pattern, *domain),
                    LifeAreaEntry {
                        challenge: challenge.to_string(),
                        benefit: benefit.to_string(),
                    },
                );
            }
        }

        let workbook = PatternName::all()
            .iter()
            .map(|p| {
                let (release, anchor) = workbook_defaults(*p);
                (
                    *p,
                    WorkbookPhrases {
                        release_phrase: release.to_string(),
                        anchor_phrase: anchor.to_string(),
                    },
                )
            })
            .collect();

        Self { life_areas, workbook }
    }

    /// Builds a library with YAML overrides layered over the built-ins.
    pub fn with_overrides(overrides: PhraseOverrides) -> Self {
        let mut library = Self::built_in();
        for (pattern, domains) in overrides.life_areas {
            for (domain, entry) in domains {
                library.life_areas.insert((pattern, domain), entry);
            }
        }
        for (pattern, phrases) in overrides.workbook {
            library.workbook.insert(pattern, phrases);
        }
        library
    }

    /// Returns the life-area entry for a pattern and domain.
    ///
    /// The built-in table is total over both enums, so this only misses
    /// when an override removed nothing and a caller holds a stale copy;
    /// callers still treat `None` as a miss and fall back.
    pub fn life_area(&self, pattern: PatternName, domain: LifeDomain) -> Option<&LifeAreaEntry> {
        self.life_areas.get(&(pattern, domain))
    }

    /// Returns the workbook phrases for a pattern.
    pub fn workbook(&self, pattern: PatternName) -> Option<&WorkbookPhrases> {
        self.workbook.get(&pattern)
    }

    /// Status-specific opening for the Love section, if one exists.
    pub fn love_branch(
        &self,
        pattern: PatternName,
        status: RelationshipStatus,
    ) -> &'static str {
        love_branch_defaults(pattern, status)
    }

    /// Generic Love opening used when no relationship status is known.
    pub fn love_generic(&self, pattern: PatternName) -> &'static str {
        love_generic_defaults(pattern)
    }

    /// One-paragraph explanation of a driver.
    pub fn driver_blurb(&self, driver: Driver) -> &'static str {
        match driver {
            Driver::Control => {
                "Control is the drive to keep outcomes in your own hands. It grows \
                 wherever unpredictability once cost you something, and it promises \
                 that nothing will go wrong if you just stay on top of everything."
            }
            Driver::Avoidance => {
                "Avoidance is the drive to keep distance from discomfort. It steps \
                 around conflict, delays the hard conversation, and trades tomorrow's \
                 bigger problem for today's relief."
            }
            Driver::Validation => {
                "Validation is the drive to be seen as good, useful, or impressive. \
                 It outsources your sense of worth to an audience and keeps you \
                 performing long after the curtain should have dropped."
            }
            Driver::FearOfRejection => {
                "Fear of rejection is the drive to stay safe from abandonment. It \
                 reads every pause as a verdict and quietly edits who you are so \
                 that no one ever has a reason to walk away."
            }
        }
    }

    /// Conflict narrative for a known dominant/secondary driver pair.
    pub fn pair_narrative(&self, dominant: Driver, secondary: Driver) -> Option<&'static str> {
        match (dominant, secondary) {
            (Driver::Control, Driver::Avoidance) | (Driver::Avoidance, Driver::Control) => Some(
                "Control and avoidance pull in opposite directions: one hand grips \
                 the wheel while the other reaches for the exit. You over-manage the \
                 things that feel safe to manage and quietly defer the ones that \
                 don't, so your effort lands everywhere except where it's needed.",
            ),
            (Driver::Control, Driver::Validation) | (Driver::Validation, Driver::Control) => Some(
                "Control and validation make a demanding team: you hold yourself to \
                 the highest standard and then scan the room to see if anyone \
                 noticed. Praise feels earned for about a minute, and then the bar \
                 moves again.",
            ),
            (Driver::Validation, Driver::FearOfRejection)
            | (Driver::FearOfRejection, Driver::Validation) => Some(
                "Validation and fear of rejection feed each other in a loop: you \
                 work to be liked so you won't be left, and every bit of approval \
                 raises the stakes of losing it. The performance gets better while \
                 the fear underneath it grows.",
            ),
            (Driver::Avoidance, Driver::FearOfRejection)
            | (Driver::FearOfRejection, Driver::Avoidance) => Some(
                "Avoidance and fear of rejection conspire to keep you out of reach: \
                 you dodge the situations where you could be judged, which means you \
                 also dodge the ones where you could be chosen. Safety and loneliness \
                 arrive in the same package.",
            ),
            _ => None,
        }
    }
}

impl Default for PhraseLibrary {
    fn default() -> Self {
        Self::built_in()
    }
}

fn life_area_defaults(pattern: PatternName, domain: LifeDomain) -> (&'static str, &'static str) {
    use LifeDomain::*;
    use PatternName::*;
    match pattern {
        Fixer => match domain {
            Love => (
                "You become the manager of the relationship instead of a partner in it, handling logistics and moods until intimacy turns into another job.",
                "A partner in real difficulty will never face it alone; you show love through steady, practical presence.",
            ),
            Career => (
                "You absorb every dropped ball on the team, so your own work happens at midnight and your title never reflects your actual load.",
                "Leaders trust you with messes nobody else will touch, and you genuinely untangle them.",
            ),
            Money => (
                "You bail out other people's budgets before your own, and money spent on rescue never builds your cushion.",
                "You're the one who actually opens the statements and deals with problems while they're still small.",
            ),
            Health => (
                "Your body is the last system you maintain; symptoms get triaged as distractions until they shout.",
                "When you do commit to a health plan, you run it with the same discipline you give everything else.",
            ),
            Friendship => (
                "Friends learn to bring you problems, not company, and you leave gatherings more drained than fed.",
                "You are the first call in a crisis, and your people know it.",
            ),
            Family => (
                "You hold the role of family fixer, mediating and patching long after it stopped being your job.",
                "Aging parents and struggling siblings have a dependable center of gravity in you.",
            ),
            SelfWorth => (
                "Your worth is indexed to being needed, so a quiet week reads as evidence you don't matter.",
                "You carry real competence, and deep down you know what you're capable of under pressure.",
            ),
            Purpose => (
                "Purpose keeps getting postponed until everyone else is okay, which is never.",
                "Service comes naturally to you; aimed at your own direction it becomes a calling instead of a leash.",
            ),
        },
        Perfectionist => match domain {
            Love => (
                "You audit your relationship against an invisible standard, and your partner feels graded instead of loved.",
                "You bring rare intentionality to love; anniversaries, details, and promises are never dropped.",
            ),
            Career => (
                "Projects stall at ninety percent because shipping means being judged, and delegation feels like lowering the bar.",
                "Your name on work is a guarantee; people stop double-checking what you touch.",
            ),
            Money => (
                "You research purchases past the point of return and berate yourself for every suboptimal dollar.",
                "Your records are immaculate and financial surprises rarely find you.",
            ),
            Health => (
                "All-or-nothing regimens collapse on the first missed workout, taking your momentum with them.",
                "When a routine sticks you execute it with precision most people can't sustain.",
            ),
            Friendship => (
                "You hold back from gatherings unless you can arrive as the polished version, so people meet your performance, not you.",
                "Friends receive your full, careful attention; you remember what matters to them.",
            ),
            Family => (
                "Family sees the inspector before they see the sibling or parent, and visits feel like inspections.",
                "You build traditions and standards your family quietly relies on.",
            ),
            SelfWorth => (
                "Your inner critic holds a standard no human meets, so achievement buys minutes of peace, not years.",
                "The same eye that judges you can genuinely tell good from great; your taste is real.",
            ),
            Purpose => (
                "The perfect path never reveals itself, so you refine plans while others live imperfect ones.",
                "When you finally commit, your follow-through turns visions into finished work.",
            ),
        },
        Pleaser => match domain {
            Love => (
                "You shape-shift into whatever your partner needs until neither of you remembers what you wanted.",
                "You notice your partner's inner weather before they do; attunement is your native language.",
            ),
            Career => (
                "You take on work nobody should have asked of you, and your yes has stopped meaning anything because it's automatic.",
                "Teams run smoother with you in them; you grease every interaction you touch.",
            ),
            Money => (
                "You pick up checks and fund favors to keep approval flowing, and your generosity outruns your means.",
                "Generosity is real currency; people remember how you show up for them.",
            ),
            Health => (
                "Your appointments are the first thing sacrificed to everyone else's schedule.",
                "You keep others' health on track, and that caretaking skill can be turned inward.",
            ),
            Friendship => (
                "You are the agreeable one, which means nobody knows your actual opinions, including you.",
                "You are easy to be around, and people genuinely relax in your company.",
            ),
            Family => (
                "You are the family's designated peacemaker, swallowing your position to keep dinners calm.",
                "You hold the family together through seasons when nobody else would bother.",
            ),
            SelfWorth => (
                "Your worth lives in other people's reactions, so one cold response can sink a whole day.",
                "Your empathy is not a weakness; it is a skill most people never develop.",
            ),
            Purpose => (
                "Your direction is assembled from other people's expectations, and it fits like borrowed clothes.",
                "You already know how to matter to people; purpose is that same gift, chosen on purpose.",
            ),
        },
        Achiever => match domain {
            Love => (
                "Your relationship gets the leftovers after the mission, and your partner competes with a scoreboard.",
                "You build a life of real substance, and a partner who joins your momentum goes places.",
            ),
            Career => (
                "Every summit reveals the next one, so promotions land flat and rest feels like falling behind.",
                "You deliver. Your track record opens doors that stay closed for others.",
            ),
            Money => (
                "Money became the score, so enough never arrives no matter what the account says.",
                "You out-earn and out-save your peers; the engine works, it just needs a destination.",
            ),
            Health => (
                "Your body is an instrument you redline, and recovery weeks read as weakness.",
                "You bring goal discipline to training that most people can only envy.",
            ),
            Friendship => (
                "Friendships get scheduled like meetings and cancelled like them too.",
                "You inspire your circle; people raise their game around you.",
            ),
            Family => (
                "You provide impressively and attend rarely; your family gets the provider, not the person.",
                "Your family's material ground is solid because of you.",
            ),
            SelfWorth => (
                "You are only as good as the last win, so your worth resets to zero every Monday.",
                "The capability is real. The resume is real. Nobody can take the evidence away.",
            ),
            Purpose => (
                "Climbing became the purpose, and nobody at this altitude remembers why.",
                "Pointed at something that matters to you, your drive moves mountains for real.",
            ),
        },
        Escapist => match domain {
            Love => (
                "When the relationship gets heavy you get light: busy, distracted, suddenly passionate about anything else.",
                "You keep play alive in a partnership; with you, love doesn't calcify into administration.",
            ),
            Career => (
                "The difficult email ages in your inbox while you perfect the easy tasks around it.",
                "You defuse tense rooms, and your flexibility makes you valuable when plans burn down.",
            ),
            Money => (
                "Unopened statements pile up because looking feels worse than not knowing, until not knowing costs more.",
                "You resist money panic; with a simple system you handle finances calmly.",
            ),
            Health => (
                "Symptoms get a comedy routine instead of a checkup.",
                "Your lightness is genuinely protective; stress diseases feed on the gravity you refuse.",
            ),
            Friendship => (
                "You are everyone's fun friend and no one's 2 a.m. call, because depth is where the heavy things live.",
                "You are the reason the group still laughs; joy is a contribution too.",
            ),
            Family => (
                "Family conflict sends you to the garage, the trip, the screen; your absence is your position.",
                "You defuse family tension that others escalate, when you stay in the room.",
            ),
            SelfWorth => (
                "Never facing the hard thing means never learning you could have, so your confidence stays borrowed.",
                "You already survived what you're avoiding thinking about; that resilience is yours.",
            ),
            Purpose => (
                "Staying light means staying shallow, and years of pleasant drift add up to an unlived weight.",
                "Your appetite for experience, pointed at one thing, becomes momentum instead of escape.",
            ),
        },
        Drifter => match domain {
            Love => (
                "You keep one foot out of every relationship, and partners feel the draft from the open door.",
                "You give a partner room to be themselves; nobody suffocates next to you.",
            ),
            Career => (
                "Two years in, every job starts feeling like a trap, and your resume reads like a travel log.",
                "You learn new fields absurdly fast and carry range most specialists lack.",
            ),
            Money => (
                "Long-term plans require a future address, so compounding never gets its decade.",
                "You need less than most to be okay; low overhead is real freedom.",
            ),
            Health => (
                "Every new program lasts until the novelty does.",
                "You'll try anything once, which finds you practices rigid people never discover.",
            ),
            Friendship => (
                "You collect acquaintances in every port and keep deep friendship on layaway.",
                "You connect easily anywhere, and old friends pick up with you like no time passed.",
            ),
            Family => (
                "You orbit the family at a distance that protects you and puzzles them.",
                "You bring outside air into a closed family system; your perspective is the fresh one.",
            ),
            SelfWorth => (
                "Without a committed test, you never find out what you're made of, and suspecting is worse than knowing.",
                "Your identity isn't chained to one role; reinvention holds no terror for you.",
            ),
            Purpose => (
                "Keeping every option open is how you've avoided choosing any of them.",
                "You have seen more of the map than most; when you choose a destination, you'll know why.",
            ),
        },
        GuardedOne => match domain {
            Love => (
                "You leave first in a hundred small ways, and the wall that keeps out hurt keeps out love at the same rate.",
                "When you finally let someone in, your loyalty runs deeper than most people can offer.",
            ),
            Career => (
                "You under-share wins and never ask for help, so you're reliable, invisible, and passed over.",
                "You work with a self-sufficiency managers dream about.",
            ),
            Money => (
                "Money is your independence fund; every dollar is armor, and spending on joy feels like lowering the drawbridge.",
                "Your reserves are real; few people are as prepared for a bad year as you.",
            ),
            Health => (
                "You'd rather limp than be seen needing, so help arrives late or never.",
                "Your pain tolerance and self-reliance carry you through what breaks others.",
            ),
            Friendship => (
                "People stop inviting you because you stopped saying yes, which proves what you already believed.",
                "The two friends you keep know a loyalty the popular never learn.",
            ),
            Family => (
                "You are present at the table and absent from the conversation, and your family has stopped knocking.",
                "You keep family confidences like a vault; people trust you with the unsayable.",
            ),
            SelfWorth => (
                "You concluded early that being known ends badly, so your worth has never been tested by real daylight.",
                "You built yourself without applause; that standing is nobody's to revoke.",
            ),
            Purpose => (
                "A guarded life stays small by design; nothing ventured, nothing lost, nothing lived.",
                "Your inner world is rich and entirely yours; shared even a little, it's a gift.",
            ),
        },
        Worrier => match domain {
            Love => (
                "You interrogate every silence for evidence of leaving, and the reassurance never holds pressure.",
                "A partner with you is never neglected; you notice everything and forget nothing that matters.",
            ),
            Career => (
                "You re-read the email six times and still hit send with dread, and risk-taking colleagues lap you.",
                "Your contingency plans save projects; the disasters you prevent are invisible only because you prevented them.",
            ),
            Money => (
                "No balance is big enough to quiet the siege arithmetic running in your head.",
                "You will never be the person blindsided by a predictable expense.",
            ),
            Health => (
                "Every ache is a diagnosis by nightfall, and the anxiety does more damage than the symptoms.",
                "Real warning signs don't slip past you, and your checkups actually happen.",
            ),
            Friendship => (
                "You replay every conversation for the moment you ruined it, so company costs you more than solitude.",
                "You are the friend who remembers, checks in, and shows up before being asked.",
            ),
            Family => (
                "Your worry reads as control to the family you're trying to protect.",
                "Your family is genuinely safer for your vigilance; the details are covered.",
            ),
            SelfWorth => (
                "You treat your fear as proof something is wrong with you, which is one more thing to fear.",
                "The sensitivity that torments you is the same instrument that makes you perceptive.",
            ),
            Purpose => (
                "A life spent bracing is a life spent not building.",
                "Your imagination for what could go wrong, reversed, is vision for what could go right.",
            ),
        },
    }
}

fn love_generic_defaults(pattern: PatternName) -> &'static str {
    use PatternName::*;
    match pattern {
        Fixer => "In love, your first instinct is to be useful, whatever your situation.",
        Perfectionist => "In love, the standard you hold yourself to walks into every room first.",
        Pleaser => "In love, you read the other person before you read yourself.",
        Achiever => "In love, the mission competes with the relationship for your best hours.",
        Escapist => "In love, lightness is your offer and your defense.",
        Drifter => "In love, part of you is always keeping the exit in sight.",
        GuardedOne => "In love, the wall goes up before anyone has thrown anything.",
        Worrier => "In love, you hold what you have tightly enough to bruise it.",
    }
}

fn love_branch_defaults(pattern: PatternName, status: RelationshipStatus) -> &'static str {
    use PatternName::*;
    use RelationshipStatus::*;
    match (pattern, status) {
        (Fixer, Single) => "Single, you're drawn to people who arrive as projects, and you call the renovation love.",
        (Fixer, Married) => "In your marriage, you've become the operations department, and the romance is buried under the logistics.",
        (Fixer, InRelationship) => "In your relationship, you manage more than you share, and your partner may not know you need anything.",
        (Fixer, Divorced) => "After your divorce, notice whether you're rebuilding yourself or already repairing someone new.",
        (Fixer, Separated) => "In this separation, the urge to fix it single-handedly is the same pattern that helped wear it down.",
        (Perfectionist, Single) => "Single, your checklist screens out every real, flawed person before the second date.",
        (Perfectionist, Married) => "In your marriage, your partner can feel the grade posted on the refrigerator, even when you never say it.",
        (Perfectionist, InRelationship) => "In your relationship, the moment feels not-quite-right often enough that right keeps receding.",
        (Perfectionist, Divorced) => "After your divorce, the autopsy of every mistake has run long enough; imperfect people rebuild too.",
        (Perfectionist, Separated) => "In this separation, perfecting your side of the story is easier than hearing theirs.",
        (Pleaser, Single) => "Single, you become whoever each date seems to want, so nobody has met the person they'd actually be choosing.",
        (Pleaser, Married) => "In your marriage, years of accommodating have made you pleasant, agreeable, and increasingly hard to find.",
        (Pleaser, InRelationship) => "In your relationship, your partner gets your yes to everything, which means they never get your honest no.",
        (Pleaser, Divorced) => "After your divorce, the question is not who you'll please next but what you actually want.",
        (Pleaser, Separated) => "In this separation, the pull to smooth it over may be louder than the question of whether you should.",
        (Achiever, Single) => "Single, dating gets optimized like a pipeline, and chemistry refuses to convert on schedule.",
        (Achiever, Married) => "In your marriage, you're winning everywhere except at the kitchen table.",
        (Achiever, InRelationship) => "In your relationship, your partner is scheduled between goals, and they can tell.",
        (Achiever, Divorced) => "After your divorce, note which losses you grieved and which you converted into more work.",
        (Achiever, Separated) => "In this separation, resist the urge to treat reconciliation as another deliverable.",
        (Escapist, Single) => "Single, things stay fun right up to the moment they could become real, and then you're busy.",
        (Escapist, Married) => "In your marriage, the hard conversations have been rescheduled so long they've compounded.",
        (Escapist, InRelationship) => "In your relationship, your partner carries the heavy topics alone while you keep things light.",
        (Escapist, Divorced) => "After your divorce, the feelings you skipped are still in the queue, patient as ever.",
        (Escapist, Separated) => "In this separation, distraction is anesthesia, not healing, and the difference shows up later.",
        (Drifter, Single) => "Single, you enjoy beginnings and vanish at the first request for a future tense.",
        (Drifter, Married) => "In your marriage, you're present in the house and provisional in the commitment, and both of you feel it.",
        (Drifter, InRelationship) => "In your relationship, the unspoken month-to-month lease keeps it from becoming a home.",
        (Drifter, Divorced) => "After your divorce, check whether you left the marriage or just continued a lifelong pattern of leaving.",
        (Drifter, Separated) => "In this separation, the relief you feel may be freedom, or it may just be the pattern breathing.",
        (GuardedOne, Single) => "Single, your walls do their job perfectly: nothing gets in, including what you want.",
        (GuardedOne, Married) => "In your marriage, you can be lonely at a distance of two feet, and so can they.",
        (GuardedOne, InRelationship) => "In your relationship, your partner knows your schedule and almost nothing of your weather.",
        (GuardedOne, Divorced) => "After your divorce, the verdict 'never again' is the old wall with fresh paint.",
        (GuardedOne, Separated) => "In this separation, withdrawal feels like strength and reads like absence.",
        (Worrier, Single) => "Single, you rehearse rejection so thoroughly that you decline invitations nobody withdrew.",
        (Worrier, Married) => "In your marriage, your vigilance asks your partner to prove daily what they already promised once.",
        (Worrier, InRelationship) => "In your relationship, every unanswered text runs a tribunal, and your partner keeps being convicted in absentia.",
        (Worrier, Divorced) => "After your divorce, the catastrophe finally happened, and you survived it; let that count as evidence.",
        (Worrier, Separated) => "In this separation, the worst-case loop is louder than ever; write it down and check it against what's actually true.",
    }
}

fn workbook_defaults(pattern: PatternName) -> (&'static str, &'static str) {
    use PatternName::*;
    match pattern {
        Fixer => (
            "a problem this week that I will let someone else own, start to finish",
            "I am valuable when my hands are empty.",
        ),
        Perfectionist => (
            "one thing I will ship this week at good enough, on purpose",
            "Done is a form of courage.",
        ),
        Pleaser => (
            "one small no I will say this week without an apology attached",
            "My preferences are information, not inconvenience.",
        ),
        Achiever => (
            "one win from this month I will celebrate before starting the next climb",
            "I am allowed to arrive.",
        ),
        Escapist => (
            "one conversation I have been postponing that I will open this week",
            "I can stay for the first uncomfortable minute.",
        ),
        Drifter => (
            "one commitment I will keep past the point where it stops being new",
            "Choosing one door is not losing the others; it is finally walking through one.",
        ),
        GuardedOne => (
            "one unpolished thing about me I will let a safe person see this week",
            "Being known is not the same as being cornered.",
        ),
        Worrier => (
            "one worry I will write down and leave until its scheduled window",
            "I can trust future me to handle what present me cannot predict.",
        ),
    }
}
