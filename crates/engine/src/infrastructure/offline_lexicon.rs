//! Built-in word list for playing without the network.

use async_trait::async_trait;

use crate::infrastructure::ports::{LookupEntry, LookupError, LookupQuery, WordLookupPort};

struct LexiconEntry {
    word: &'static str,
    definitions: &'static [&'static str],
    tags: &'static [&'static str],
}

const fn entry(
    word: &'static str,
    definitions: &'static [&'static str],
    tags: &'static [&'static str],
) -> LexiconEntry {
    LexiconEntry {
        word,
        definitions,
        tags,
    }
}

static ENTRIES: &[LexiconEntry] = &[
    // Animals
    entry("cat", &["n\tfeline mammal usually having thick soft fur", "n\ta spiteful woman gossip"], &["animals", "pets"]),
    entry("dog", &["n\ta domesticated member of the genus Canis", "v\tgo after with the intent to catch"], &["animals", "pets"]),
    entry("frog", &["n\ttailless stout-bodied amphibian with long hind limbs for leaping"], &["animals"]),
    entry("fish", &["n\ta cold-blooded aquatic vertebrate with fins", "v\tseek indirectly"], &["animals", "food", "ocean"]),
    entry("bird", &["n\twarm-blooded egg-laying vertebrate with feathers and wings"], &["animals"]),
    entry("wolf", &["n\twild carnivorous mammal of the dog family, living and hunting in packs"], &["animals"]),
    entry("bear", &["n\tmassive plantigrade carnivorous or omnivorous mammal", "v\tbring forth", "v\tput up with something unpleasant"], &["animals"]),
    entry("lion", &["n\tlarge gregarious predatory feline of Africa and India", "n\ta celebrity who is lionized"], &["animals"]),
    entry("goat", &["n\tagile hollow-horned ruminant closely related to sheep"], &["animals", "farm"]),
    entry("duck", &["n\tsmall wild or domesticated web-footed broad-billed swimming bird", "v\tto move quickly downwards"], &["animals", "farm"]),
    entry("toad", &["n\tany of various tailless stout-bodied amphibians with rough skin"], &["animals"]),
    entry("horse", &["n\tsolid-hoofed herbivorous quadruped domesticated since prehistoric times"], &["animals", "farm"]),
    entry("mouse", &["n\tany of numerous small rodents with pointed snouts", "n\ta hand-operated pointing device"], &["animals", "computers"]),
    entry("whale", &["n\tany of the larger cetacean mammals having a streamlined body"], &["animals", "ocean"]),
    entry("owl", &["n\tnocturnal bird of prey with hawk-like beak and claws and large head"], &["animals"]),
    entry("ant", &["n\tsocial insect living in organized colonies"], &["animals", "insects"]),
    entry("bee", &["n\tany of numerous hairy-bodied insects that gather nectar", "n\ta social gathering to carry out some communal task"], &["animals", "insects"]),
    entry("crab", &["n\tdecapod having eyes on short stalks and a broad flattened carapace"], &["animals", "ocean", "food"]),
    entry("seal", &["n\tany of numerous marine mammals that come on shore to breed", "n\ta device incised to make an impression"], &["animals", "ocean"]),
    entry("eagle", &["n\tany of various large keen-sighted diurnal birds of prey"], &["animals"]),
    // Food
    entry("milk", &["n\ta white nutritious liquid secreted by mammals", "v\texploit as much as possible"], &["food", "drinks", "farm"]),
    entry("cake", &["n\tbaked goods made from or based on a mixture of flour, sugar and eggs"], &["food"]),
    entry("pear", &["n\tsweet juicy gritty-textured fruit"], &["food", "fruit"]),
    entry("corn", &["n\ttall annual cereal grass bearing kernels on large ears"], &["food", "plants", "farm"]),
    entry("rice", &["n\tgrains used as food either unpolished or more often polished"], &["food", "plants"]),
    entry("bean", &["n\tany of various edible seeds of plants of the family Leguminosae"], &["food", "plants"]),
    entry("mint", &["n\tany of various aromatic plants used as flavoring", "n\ta plant where money is coined"], &["food", "plants"]),
    entry("apple", &["n\tfruit with red or yellow or green skin and crisp flesh"], &["food", "fruit"]),
    entry("bread", &["n\tfood made from dough of flour or meal and usually raised with yeast"], &["food"]),
    entry("lemon", &["n\tyellow oval fruit with juicy acidic flesh"], &["food", "fruit", "colors"]),
    entry("plum", &["n\tany of numerous varieties of small to medium-sized round fruit"], &["food", "fruit"]),
    entry("egg", &["n\toval reproductive body of a fowl used as food"], &["food", "farm"]),
    entry("tea", &["n\ta beverage made by steeping leaves in boiling water"], &["food", "drinks"]),
    entry("soup", &["n\tliquid food especially of meat or fish or vegetable stock"], &["food"]),
    // Nature
    entry("sun", &["n\tthe star that is the source of light and heat for the planets"], &["nature", "space", "weather"]),
    entry("star", &["n\tcelestial body of hot gases that radiates energy", "n\tsomeone who is dazzlingly skilled"], &["nature", "space"]),
    entry("tree", &["n\ta tall perennial woody plant having a main trunk and branches"], &["nature", "plants"]),
    entry("moon", &["n\tthe natural satellite of the Earth"], &["nature", "space"]),
    entry("rose", &["n\tany of many shrubs of the genus Rosa that bear roses", "n\ta dusty pink color"], &["nature", "plants", "colors"]),
    entry("leaf", &["n\tthe main organ of photosynthesis in higher plants", "n\ta sheet of any written or printed material"], &["nature", "plants"]),
    entry("lake", &["n\ta body of fresh water surrounded by land"], &["nature", "water"]),
    entry("rock", &["n\ta lump or mass of hard consolidated mineral matter", "n\ta genre of popular music"], &["nature", "music"]),
    entry("sand", &["n\ta loose material consisting of grains of rock or coral"], &["nature", "ocean"]),
    entry("wave", &["n\tone of a series of ridges that moves across the surface of a liquid", "v\tsignal with the hands"], &["nature", "ocean", "water"]),
    entry("river", &["n\ta large natural stream of water"], &["nature", "water"]),
    entry("stone", &["n\ta lump or mass of hard consolidated mineral matter", "n\tan avoirdupois unit used to measure the weight of a human body"], &["nature"]),
    entry("hill", &["n\ta local and well-defined elevation of the land"], &["nature"]),
    // Weather
    entry("snow", &["n\tprecipitation falling from clouds in the form of ice crystals"], &["weather", "nature"]),
    entry("wind", &["n\tair moving from an area of high pressure to an area of low pressure", "v\tcoil the length of something around something else"], &["weather", "nature"]),
    entry("rain", &["n\twater falling in drops from vapor condensed in the atmosphere"], &["weather", "nature", "water"]),
    entry("fire", &["n\tthe event of something burning", "v\tterminate the employment of"], &["nature"]),
    entry("storm", &["n\ta violent weather condition with winds and rain or snow"], &["weather"]),
    entry("fog", &["n\tdroplets of water vapor suspended in the air near the ground"], &["weather"]),
    entry("cloud", &["n\ta visible mass of water or ice particles suspended at a considerable altitude"], &["weather", "nature", "computers"]),
    // Colors and gems
    entry("blue", &["n\tthe color of the clear sky in the daytime", "a\tlow in spirits"], &["colors"]),
    entry("pink", &["n\ta light shade of red"], &["colors"]),
    entry("gold", &["n\ta soft yellow malleable ductile metallic element", "n\ta deep yellow color"], &["colors", "gems", "metals"]),
    entry("ruby", &["n\ta transparent piece of ruby that has been cut and polished", "n\ta deep and vivid red color"], &["colors", "gems"]),
    entry("opal", &["n\ta translucent mineral consisting of hydrated silica of variable color"], &["gems"]),
    entry("zinc", &["n\ta bluish-white lustrous metallic element"], &["metals"]),
    entry("red", &["n\tred color or pigment", "n\ta tinge of red"], &["colors"]),
    entry("green", &["n\tgreen color or pigment", "n\tan area of closely cropped grass surrounding the hole on a golf course"], &["colors", "nature"]),
    entry("amber", &["n\ta deep yellow color", "n\toil-soluble fossil resin"], &["colors", "gems"]),
    entry("pearl", &["n\ta smooth lustrous round structure inside the shell of a clam or oyster"], &["gems", "ocean"]),
    // Objects
    entry("car", &["n\ta motor vehicle with four wheels", "n\ta wheeled vehicle adapted to the rails of a railroad"], &["vehicles", "objects"]),
    entry("hat", &["n\theaddress that protects the head from bad weather", "n\tan informal term for a person's role"], &["clothes", "objects"]),
    entry("book", &["n\ta written work or composition that has been published", "v\tengage for a performance"], &["objects", "school"]),
    entry("lamp", &["n\tan artificial source of visible illumination"], &["objects", "home"]),
    entry("ring", &["n\tjewelry consisting of a circlet of precious metal", "n\ta characteristic sound"], &["objects", "gems"]),
    entry("ship", &["n\ta vessel that carries passengers or freight", "v\ttransport commercially"], &["vehicles", "ocean"]),
    entry("door", &["n\ta swinging or sliding barrier that will close the entrance to a room or building"], &["home", "objects"]),
    entry("desk", &["n\ta piece of furniture with a writing surface and usually drawers"], &["home", "school", "objects"]),
    entry("fork", &["n\tcutlery used for serving and eating food", "n\tthe place where something divides into branches"], &["home", "objects", "food"]),
    entry("kite", &["n\tplaything consisting of a light frame covered with tissue paper", "n\tany of several small graceful hawks"], &["objects", "toys", "animals"]),
    entry("mask", &["n\ta covering to disguise or conceal the face"], &["objects", "clothes"]),
    entry("nest", &["n\ta structure in which animals lay eggs or give birth to their young"], &["animals", "nature"]),
    entry("oven", &["n\tkitchen appliance used for baking or roasting"], &["home", "food"]),
    entry("rope", &["n\ta strong line"], &["objects"]),
    entry("sock", &["n\thosiery consisting of a cloth covering for the foot"], &["clothes"]),
    entry("vase", &["n\tan open jar of glass or porcelain used as an ornament or to hold flowers"], &["home", "objects"]),
    entry("yarn", &["n\ta fine cord of twisted fibers", "n\tthe act of giving an account describing incidents"], &["objects"]),
    entry("chair", &["n\ta seat for one person, with a support for the back", "n\tthe officer who presides at meetings"], &["home", "objects"]),
    entry("clock", &["n\ta timepiece that shows the time of day"], &["home", "objects"]),
    entry("train", &["n\tpublic transport provided by a line of railway cars", "v\tcreate by training and teaching"], &["vehicles"]),
    entry("bus", &["n\ta vehicle carrying many passengers"], &["vehicles"]),
    // Everything else
    entry("king", &["n\ta male sovereign", "n\tone of the four face cards in a deck bearing a picture of a king"], &["people", "games"]),
    entry("queen", &["n\tthe only fertile female in a colony of social insects", "n\tfemale monarch"], &["people", "games", "insects"]),
    entry("quiz", &["n\tan examination consisting of a few short questions", "v\tquestion closely"], &["school", "games"]),
    entry("jump", &["n\tthe act of jumping", "v\tmove forward by leaps and bounds"], &["sports"]),
    entry("hand", &["n\tthe prehensile extremity of the superior limb", "n\ta hired laborer"], &["body"]),
    entry("jazz", &["n\ta genre of popular music that originated among Black Americans", "n\tempty rhetoric or insincere talk"], &["music"]),
    entry("park", &["n\ta large area of land preserved in its natural state as public property", "v\tmaneuver a vehicle into a parking space"], &["places", "nature"]),
    entry("unit", &["n\tany division of quantity accepted as a standard of measurement", "n\tan individual or group regarded as a whole"], &["school"]),
    entry("drum", &["n\ta musical percussion instrument", "n\ta cylindrical metal container"], &["music"]),
    entry("song", &["n\ta short musical composition with words"], &["music"]),
    entry("piano", &["n\ta keyboard instrument that is played by depressing keys", "a\tused chiefly as a direction or description in music"], &["music"]),
    entry("ball", &["n\tround object that is hit or thrown or kicked in games", "n\ta lavish dance requiring formal attire"], &["sports", "toys", "games"]),
    entry("golf", &["n\ta game played on a large open course with small hard balls"], &["sports", "games"]),
    entry("nose", &["n\tthe organ of smell and entrance to the respiratory tract"], &["body"]),
    entry("heart", &["n\tthe locus of feelings and intuitions", "n\tthe hollow muscular organ that pumps blood"], &["body"]),
];

/// In-memory `WordLookupPort` over a fixed word list.
///
/// Matches the `?` spelling pattern exactly. With a topic, only words tagged
/// with that topic are returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLexicon;

impl OfflineLexicon {
    pub fn new() -> Self {
        Self
    }

    /// Number of words in the built-in list.
    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }

    fn search(&self, query: &LookupQuery) -> Vec<LookupEntry> {
        let limit = usize::try_from(query.max_results).unwrap_or(usize::MAX);
        ENTRIES
            .iter()
            .filter(|e| query.pattern.matches(e.word))
            .filter(|e| match &query.topic {
                Some(topic) => e.tags.iter().any(|t| t.eq_ignore_ascii_case(topic.as_str())),
                None => true,
            })
            .take(limit)
            .map(|e| {
                LookupEntry::new(
                    e.word,
                    e.definitions.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl WordLookupPort for OfflineLexicon {
    async fn lookup(&self, query: LookupQuery) -> Result<Vec<LookupEntry>, LookupError> {
        let entries = self.search(&query);
        tracing::debug!(
            pattern = %query.pattern,
            topic = ?query.topic.as_ref().map(|t| t.as_str()),
            matches = entries.len(),
            "Offline lexicon lookup"
        );
        Ok(entries)
    }
}
