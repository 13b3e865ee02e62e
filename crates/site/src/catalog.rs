//! Static site content: the seed catalog, cash goals, and page constants.
//!
//! Display fields here are authoritative; `seed::reconcile` pushes edits to
//! the store without touching claims. Gift ids are stable keys and must
//! never be reused for a different item.

use chrono::{DateTime, TimeZone, Utc};

use everafter_core::{GiftId, GiftSeed, GoalId, GoalSeed, Reais};

pub const COUPLE_NAMES: &str = "Gabriella & Wevelley";
pub const COUPLE_PHOTO: &str =
    "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?q=80&w=2070&auto=format&fit=crop";

pub const PIX_KEY: &str = "75 992257902";
pub const PIX_HOLDER_NAME: &str = "Gabriella & Wevelley";
pub const PIX_QR_CODE_URL: &str = "https://i.ibb.co/4np1C1gC/QR-code-wevelley.jpg";

pub const CEREMONY_TIME: &str = "17:00 Horas";
pub const CEREMONY_VENUE: &str = "Igreja Bom Jesus";
pub const CEREMONY_MAPS_URL: &str = "https://maps.app.goo.gl/7wRmoRdjNPS5XCM3A";

/// Moment the countdown targets (2026-02-21 18:00, stored as UTC-3).
#[must_use]
pub fn wedding_date() -> DateTime<Utc> {
    chrono::FixedOffset::west_opt(3 * 3600)
        .and_then(|tz| tz.with_ymd_and_hms(2026, 2, 21, 18, 0, 0).single())
        .map_or_else(Utc::now, |dt| dt.with_timezone(&Utc))
}

/// The two contribution goals, created once at seed time.
#[must_use]
pub fn goal_seeds() -> Vec<GoalSeed> {
    vec![
        GoalSeed {
            id: GoalId::new("honeymoon_goal"),
            title: "Lua de Mel".to_owned(),
            target_amount: Reais::new(8_000),
        },
        GoalSeed {
            id: GoalId::new("photos_goal"),
            title: "Fotografia".to_owned(),
            target_amount: Reais::new(1_500),
        },
    ]
}

fn g(id: &str, name: &str, description: &str, image_url: &str, category: &str, max: i32) -> GiftSeed {
    GiftSeed {
        id: GiftId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        image_url: image_url.to_owned(),
        category: category.to_owned(),
        max_quantity: max,
    }
}

/// The full seed catalog, grouped by category.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn gift_seeds() -> Vec<GiftSeed> {
    const CB: &str = "Cama & Banho";
    const CD: &str = "Casa & Décor";
    const CZ: &str = "Cozinha";

    vec![
        g("cb-1", "Cama Queen", "O alicerce dos nossos sonhos.", "https://martinelloeletrodomesticos.fbitsstatic.net/img/p/conjunto-box-queen-ortobom-star-158x198-79271/265863.jpg?w=482&h=482&v=no-change&qs=ignore", CB, 1),
        g("cb-2", "Jogo de Cama Queen", "Toque macio de 600 fios.", "https://i.pinimg.com/736x/ec/69/dd/ec69ddf0202b3cb30e02e650f66d5039.jpg", CB, 4),
        g("cb-3", "Jogo de Banho", "Para o conforto de um banho relaxante.", "https://i.pinimg.com/736x/55/1b/d5/551bd5b2b61b72f2c8861f988c70fafe.jpg", CB, 4),
        g("cb-4", "Par de Travesseiros", "Nuvens suaves.", "https://i.pinimg.com/736x/6e/53/bd/6e53bd5829f56d4b2aaf2749eb319fa6.jpg", CB, 2),
        g("cb-5", "Edredom", "Aconchego garantido.", "https://i.pinimg.com/1200x/dc/49/09/dc49093e6f6a48ce17e304fb0bc1b920.jpg", CB, 2),
        g("cb-6", "Cobertor", "Um abraço quentinho.", "https://i.pinimg.com/1200x/b9/48/7e/b9487eabb96337c9170bd1a6980fc370.jpg", CB, 3),
        g("cd-1", "Abajur", "Luz suave intimista.", "https://i.pinimg.com/736x/bf/39/dc/bf39dc3d84220e973951b59b55a975c7.jpg", CD, 2),
        g("cd-2", "Lixeira Inox", "Elegância e organização.", "https://i.pinimg.com/736x/d4/33/23/d43323d31932954c597655b27151476e.jpg", CD, 2),
        g("cd-3", "Jogo de Tapetes", "Conforto aos pés.", "https://feiraodetoalhas.cdn.magazord.com.br/img/2023/09/produto/3592/tapate-oval-algodao-indian.jpg", CD, 1),
        g("cd-4", "Mesa de Escritório", "Espaço para planejar o futuro.", "https://i.pinimg.com/1200x/56/46/aa/5646aa776110b2b47fffb33926f45772.jpg", CD, 1),
        g("cd-5", "Impressora", "Praticidade para home office.", "https://i.pinimg.com/1200x/92/44/a0/9244a08251b34ff9e168ef501cf972e0.jpg", CD, 1),
        g("cd-6", "Mesa de Cabeceira", "Para apoiar nossos livros.", "https://i.pinimg.com/736x/c9/11/2f/c9112fee8d4fce93d829f6a29880cfd3.jpg", CD, 1),
        g("cd-7", "Sapateira", "Organização diária.", "https://i.pinimg.com/1200x/14/12/24/141224b5c9b9739c0d100e092cdc3277.jpg", CD, 1),
        g("cd-8", "Ventilador", "Brisas frescas.", "https://i.pinimg.com/1200x/b7/9a/fc/b79afc846118d8f9b79393ed91ca27e2.jpg", CD, 1),
        g("cd-9", "Umidificador de Ar", "Bem-estar e saúde.", "https://i.pinimg.com/736x/8a/b5/1c/8ab51c38e9f9cfe19b35f22508b045cf.jpg", CD, 1),
        g("cd-10", "Máquina de Lavar", "Cuidado essencial.", "https://i.pinimg.com/1200x/d4/29/ad/d429adac49b66715895893be051c46f3.jpg", CD, 1),
        g("cd-11", "Tanquinho", "Auxílio prático.", "https://i.pinimg.com/736x/bd/02/11/bd0211c8d888dfa9b20d8a8b21e9a0de.jpg", CD, 1),
        g("cd-12", "Aspirador de Pó", "Lar sempre impecável.", "https://i.pinimg.com/736x/1a/cd/ad/1acdadc648753f4402ce413f4d9daa37.jpg", CD, 1),
        g("cd-13", "Ferro de Passar", "Para estarmos alinhados.", "https://i.pinimg.com/1200x/d0/73/7b/d0737b30ee7bd1d350ea20c07df6b2bb.jpg", CD, 1),
        g("cd-14", "Tábua de Passar", "Suporte perfeito.", "https://i.pinimg.com/736x/9f/51/2f/9f512f3f0ffac2ea2f0fecc16dd4389f.jpg", CD, 1),
        g("cd-15", "Cesto de Roupa", "Charme na lavanderia.", "https://i.pinimg.com/736x/05/55/eb/0555ebd5f09020d7c1f6b1fc554c23d7.jpg", CD, 1),
        g("cd-18", "Espelho Decorativo", "Refletir nossa alegria.", "https://i.pinimg.com/1200x/92/f5/62/92f56222c5eeb4106eeaf0aae111aeda.jpg", CD, 1),
        g("cd-19", "Mop de Limpeza", "Praticidade moderna.", "https://i.pinimg.com/1200x/02/0b/c6/020bc6caf7d069efe0d16fa5d33a52b3.jpg", CD, 1),
        g("cz-1", "Geladeira", "Coração da cozinha.", "https://i.pinimg.com/736x/db/ae/77/dbae774bdacd782b5e9a106e34154669.jpg", CZ, 1),
        g("cz-2", "Fogão", "Receitas de família.", "https://i.pinimg.com/736x/01/91/60/0191606d1462558392e100519cb5b581.jpg", CZ, 1),
        g("cz-3", "Air Fryer", "Sabor e saúde.", "https://i.pinimg.com/736x/28/8a/74/288a74ca157de712c14b0ed6ad22e56b.jpg", CZ, 1),
        g("cz-4", "Microondas", "Facilidade diária.", "https://i.pinimg.com/736x/c0/c9/9b/c0c99b38f0cb723e4eb41be1d2cbdf9e.jpg", CZ, 1),
        g("cz-5", "Liquidificador", "Sucos frescos.", "https://i.pinimg.com/736x/46/9a/5a/469a5a2ad31914251624ac7e45cc7ec6.jpg", CZ, 1),
        g("cz-6", "Jogo de Panelas", "Arte culinária.", "https://i.pinimg.com/1200x/ab/0b/e0/ab0be033a21ea2da63ea1e8089ab94b5.jpg", CZ, 2),
        g("cz-7", "Panela de Pressão", "Segurança e rapidez.", "https://i.pinimg.com/1200x/05/2a/07/052a07e39fd6a4e755536fd300a99a68.jpg", CZ, 1),
        g("cz-8", "Jogo de Talheres", "Servir com elegância.", "https://i.pinimg.com/736x/53/fd/43/53fd4338b67fec116199dbf9f11eec0b.jpg", CZ, 2),
        g("cz-9", "Jogo de Copos", "Pequenas vitórias.", "https://i.pinimg.com/736x/f0/49/1e/f0491e3429222709717ea033575476ba.jpg", CZ, 2),
        g("cz-10", "Pratos", "Nossas melhores receitas.", "https://i.pinimg.com/736x/4b/28/0b/4b280b57184dc8687afdf0c7b5612a80.jpg", CZ, 2),
        g("cz-11", "Filtro de Água", "Água pura.", "https://i.pinimg.com/736x/df/b3/50/dfb350e3b8176281ecd4c915c100567b.jpg", CZ, 1),
        g("cz-12", "Faqueiro", "Peças finas.", "https://i.pinimg.com/736x/67/3b/8c/673b8cf96baed30ffd012e618fa0ff96.jpg", CZ, 1),
        g("cz-13", "Cuscuzeira", "Tradição matinal.", "https://i.pinimg.com/736x/e8/f5/00/e8f5001d69c84a26f12e3f6c88e1d77b.jpg", CZ, 1),
        g("cz-14", "Frigideira Antiaderente", "Tapiocas perfeitas.", "https://i.pinimg.com/736x/59/89/2c/59892cd877cfe0cf1cba15420e2d4763.jpg", CZ, 1),
        g("cz-15", "Forno Elétrico", "Assados perfeitos.", "https://i.pinimg.com/1200x/12/4f/49/124f49f55dac0073732e73acb332a418.jpg", CZ, 1),
        g("cz-16", "Processador de Alimentos", "Agilidade culinária.", "https://i.pinimg.com/1200x/f2/30/56/f230566bdc1c5e88a7d1a85d648afb02.jpg", CZ, 1),
        g("cz-17", "Jogo de Pano de Prato", "Charme na copa.", "https://i.pinimg.com/736x/cb/ac/dc/cbacdcf3f1249f47e2fbdd438a0254b6.jpg", CZ, 2),
        g("cz-18", "Formas e Assadeiras", "Momentos doces.", "https://i.pinimg.com/1200x/98/f5/33/98f533a133cf6e5b79daaa3602c0a9c7.jpg", CZ, 2),
        g("cz-19", "Utensílios de Cozinha", "Conchas e espátulas.", "https://i.pinimg.com/736x/4d/b9/d7/4db9d72532a6abb146fb5e6de9ed9a06.jpg", CZ, 1),
        g("cz-20", "Travessa de Vidro", "Transparência elegante.", "https://i.pinimg.com/1200x/b5/e5/96/b5e596ed3722e6f37e5ce9737fcf0b11.jpg", CZ, 2),
        g("cz-21", "Chaleira Elétrica", "Chá em segundos.", "https://i.pinimg.com/736x/cf/ab/e6/cfabe6dea70cd53ba1f2b934276a08c7.jpg", CZ, 1),
        g("cz-22", "Conjunto de Potes", "Organização hermética.", "https://i.pinimg.com/736x/8e/e7/a7/8ee7a7547134a7a39d26c46eb553ca23.jpg", CZ, 3),
        g("cz-23", "Potes de Tempero", "Segredo do sabor.", "https://i.pinimg.com/1200x/62/d6/f7/62d6f7c75858b0bb4f9317450abba2c5.jpg", CZ, 1),
        g("cz-24", "Jarras", "Refrescos com estilo.", "https://i.pinimg.com/736x/74/2e/d3/742ed3416ec6a917c356c781df5877a0.jpg", CZ, 2),
        g("cz-25", "Sanduicheira", "Lanches crocantes.", "https://i.pinimg.com/736x/56/de/51/56de511cae71027b937235579945542a.jpg", CZ, 1),
        g("cz-26", "Grill", "Grelhados saudáveis.", "https://i.pinimg.com/1200x/45/31/e8/4531e8eed9b893bbc58d3d8e49213491.jpg", CZ, 1),
        g("cz-27", "Batedeira", "Bolos fofinhos.", "https://i.pinimg.com/736x/db/ad/07/dbad077788362602e3a3af138f5375b9.jpg", CZ, 1),
        g("cz-28", "Cafeteira", "Aroma matinal.", "https://i.pinimg.com/1200x/ff/8d/79/ff8d791967926ed4c2cd1a4a9e8d3851.jpg", CZ, 1),
        g("cz-29", "Panela de Arroz", "Arroz soltinho.", "https://i.pinimg.com/1200x/f3/5d/f6/f35df6c73729f8d949111406f374eebe.jpg", CZ, 1),
        g("cz-30", "Fruteira", "Cores e saúde.", "https://i.pinimg.com/1200x/29/95/c9/2995c9caa9955054ca20b8b4479a8cbd.jpg", CZ, 1),
        g("cz-31", "Escorredor de Louça", "Organização essencial.", "https://i.pinimg.com/736x/63/04/47/63044773dc5cbb7b0726ebca201abcc1.jpg", CZ, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let seeds = gift_seeds();
        let ids: HashSet<_> = seeds.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn test_seed_quantities_are_positive() {
        assert!(gift_seeds().iter().all(|s| s.max_quantity >= 1));
        assert!(goal_seeds().iter().all(|s| s.target_amount.as_i64() > 0));
    }

    #[test]
    fn test_wedding_date_is_fixed() {
        let dt = wedding_date();
        assert_eq!(dt.to_rfc3339(), "2026-02-21T21:00:00+00:00");
    }
}
