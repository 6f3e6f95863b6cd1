//! The fixed, ordered card catalog.
//!
//! A catalog is validated once at construction and never mutated afterwards.
//! The built-in "Astros do Rock" deck is a process-wide table initialized on
//! first use; custom decks can be loaded from a JSON array of cards at
//! startup.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::card::Card;
use crate::error::{CatalogError, CatalogResult};

/// An immutable, ordered collection of cards with unique positive ids.
///
/// Cloning is cheap: clones share the same card storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Arc<[Card]>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    cards: builtin_cards().into(),
});

impl Catalog {
    /// Asset path of the card back shown while the deck is hidden.
    pub const BACK_IMAGE: &'static str = "/png/card-verse.png";

    /// Title shown above the deck.
    pub const TITLE: &'static str = "Astros do Rock TAROT";

    /// The built-in deck.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Build a catalog, rejecting empty decks, zero ids and duplicate ids.
    pub fn from_cards(cards: Vec<Card>) -> CatalogResult<Self> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if card.id == 0 {
                return Err(CatalogError::InvalidId {
                    name: card.name.clone(),
                });
            }
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
        }
        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Parse a catalog from a JSON array of card records.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Read and parse a JSON deck file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), cards = catalog.len(), "loaded deck");
        Ok(catalog)
    }

    /// Number of cards. Always at least one.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards. Never true for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at a position in catalog order.
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Look up a card by id.
    pub fn find(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Iterate over cards in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// All ids in catalog order.
    pub fn ids(&self) -> Vec<u32> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn builtin_cards() -> Vec<Card> {
    vec![
        Card::new(
            1,
            "O Mago - Freddie Mercury",
            "/png/card-1.png",
            "O Mago representa a manifestação, o poder criativo e a capacidade de transformar \
             ideias em realidade. Ele tem todos os elementos à sua disposição e sabe usá-los com \
             maestria, como um verdadeiro alquimista do mundo real. É símbolo de carisma, talento \
             e domínio técnico.\n\n\
             Freddie Mercury foi exatamente isso: um mestre da criação. Sua presença de palco \
             magnética, sua voz única e sua habilidade de unir performance teatral com composições \
             poderosas o tornaram uma figura mágica na história do rock. Como o Mago, Freddie \
             canalizava energia e emoção, transformando-as em arte. Ele tinha domínio sobre sua \
             imagem, sua música e seu público — e por isso, representa com perfeição o arquétipo \
             do Mago.",
        ),
        Card::new(
            2,
            "O Louco - Raul Seixas",
            "/png/card-2.png",
            "O Louco é a carta do início da jornada, do impulso criativo, da liberdade sem \
             amarras e da coragem de ser diferente, mesmo que isso pareça insano aos olhos dos \
             outros. Ele representa aquele que segue seu próprio caminho, mesmo que sem rumo \
             claro, guiado apenas pelo desejo de viver intensamente. Raul Seixas traduz essa \
             energia como ninguém. Conhecido como o “maluco beleza”, ele desafiou normas sociais \
             e musicais com letras que misturavam filosofia, crítica social, misticismo e humor. \
             Sua atitude provocadora, seu espírito livre e sua recusa em se encaixar nos padrões \
             fazem dele a personificação perfeita do Louco — alguém que ousou seguir seu próprio \
             caminho, custe o que custar.",
        ),
        Card::new(
            3,
            "O Imperador – Elvis Presley",
            "/png/card-3.png",
            "O Imperador simboliza estrutura, liderança, autoridade e domínio sobre o mundo \
             material. Ele representa a figura do pai, do rei, daquele que estabelece ordem e \
             governa com presença firme. Está ligado ao poder terreno e à construção de uma base \
             sólida.\n\n\
             Elvis Presley, o “Rei do Rock”, é a própria figura imperial dentro da história da \
             música. Com sua presença imponente, ele mudou o cenário cultural e estabeleceu uma \
             nova era no entretenimento. Seu legado influenciou gerações, e sua imagem continua \
             sendo sinônimo de poder, status e influência. Como Imperador, Elvis representa a \
             autoridade conquistada pelo talento e pela inovação — um pilar inabalável no universo \
             do rock.",
        ),
        Card::new(
            4,
            "A Sacerdotisa - Stevie Nicks",
            "/png/card-4.png",
            "A Sacerdotisa é símbolo do mistério, da intuição e da sabedoria interior. Ela \
             guarda os segredos do inconsciente e da espiritualidade, conectando o visível ao \
             invisível. É uma figura enigmática, ligada à lua, à magia e ao poder feminino \
             introspectivo.\n\n\
             Stevie Nicks, com sua imagem mística e sua voz hipnótica, incorpora todas essas \
             qualidades. Desde os figurinos esvoaçantes até as letras repletas de simbolismos e \
             espiritualidade, Stevie sempre se apresentou como uma figura quase etérea. Ela \
             representa o lado sensível, intuitivo e mágico do rock, sendo a Sacerdotisa \
             perfeita: aquela que canta as emoções mais profundas com uma força silenciosa e \
             enfeitiçante.",
        ),
        Card::new(
            5,
            "A Imperatriz - Rita Lee",
            "/png/card-5.png",
            "A Imperatriz é a carta da criatividade fértil, da abundância, do amor, da natureza \
             e da expressão do feminino em sua forma mais plena. Ela é mãe, artista, amante, \
             criadora. Representa o florescimento das ideias e a força da mulher que cria mundos \
             com sua sensibilidade.\n\n\
             Rita Lee foi um furacão criativo que marcou gerações. Como Imperatriz, ela desafiou \
             papéis de gênero, revolucionou a música brasileira com irreverência e inteligência, \
             e foi pioneira em muitos sentidos. Ao mesmo tempo, mostrou seu lado doce, maternal e \
             sensível — sem nunca deixar de ser livre. Rita encarna o poder feminino em toda sua \
             complexidade, e por isso ocupa com maestria o trono da Imperatriz neste baralho.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> Card {
        Card::new(id, format!("Card {id}"), format!("/png/card-{id}.png"), "text")
    }

    #[test]
    fn builtin_has_five_cards_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.ids(), vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.get(0).unwrap().name, "O Mago - Freddie Mercury");
        assert_eq!(catalog.find(5).unwrap().image, "/png/card-5.png");
    }

    #[test]
    fn builtin_descriptions_have_paragraphs() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find(1).unwrap().paragraphs().count(), 2);
        assert_eq!(catalog.find(2).unwrap().paragraphs().count(), 1);
    }

    #[test]
    fn builtin_descriptions_keep_their_wording() {
        let catalog = Catalog::builtin();
        assert!(
            catalog.find(1).unwrap().description.ends_with(
                "seu público — e por isso, representa com perfeição o arquétipo do Mago."
            )
        );
        assert!(catalog.find(2).unwrap().description.contains("do Louco — alguém que ousou"));
        assert!(catalog.find(3).unwrap().description.contains("inovação — um pilar inabalável"));
        assert!(catalog.find(5).unwrap().description.contains("sensível — sem nunca deixar"));
        for card in &catalog {
            assert!(!card.description.trim_end().ends_with(".,"), "card {}", card.id);
        }
    }

    #[test]
    fn builtin_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(Arc::ptr_eq(&a.cards, &b.cards));
    }

    #[test]
    fn find_miss_is_none() {
        assert!(Catalog::builtin().find(99).is_none());
        assert!(Catalog::builtin().get(5).is_none());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Catalog::from_cards(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn rejects_zero_id() {
        let err = Catalog::from_cards(vec![card(1), card(0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { .. }));
    }

    #[test]
    fn rejects_duplicate_id() {
        let err = Catalog::from_cards(vec![card(1), card(2), card(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert_eq!(err.to_string(), "duplicate card id 1");
    }

    #[test]
    fn ids_need_not_be_contiguous() {
        let catalog = Catalog::from_cards(vec![card(10), card(3)]).unwrap();
        assert_eq!(catalog.ids(), vec![10, 3]);
        assert_eq!(catalog.find(3).unwrap().name, "Card 3");
    }

    #[test]
    fn from_json() {
        let json = r#"[
            {"id": 7, "name": "A Estrela", "image": "/png/card-7.png", "description": "Esperança."}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(7).unwrap().description, "Esperança.");
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let json = serde_json::to_string(&vec![card(1), card(2)]).unwrap();
        std::fs::write(&path, json).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.ids(), vec![1, 2]);
    }

    #[test]
    fn load_missing_file() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
