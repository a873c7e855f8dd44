// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{LeadRecord, LeadType};

const SAMPLE_LEADS: [(&str, &str, &str, &str, &str, LeadType); 9] = [
    (
        "1",
        "Vamsi Krishna",
        "(784) 415-9221",
        "vkk@gmail.com",
        "North Bethesda, Maryland, 23323",
        LeadType::Seller,
    ),
    (
        "2",
        "John Test",
        "(994) 871-5084",
        "smaloth@ptcg.in",
        "7776",
        LeadType::Buyer,
    ),
    (
        "3",
        "Shelly Null",
        "(203) 241-9545",
        "sgrumbo@gmail.com",
        "8 Dolan Ave, Matawan, NJ, 07747",
        LeadType::Seller,
    ),
    (
        "4",
        "Alyce Molinari",
        "(973) 723-4211",
        "ALYCE.MOLINARI@PR...",
        "Caldwell, NJ, 07006",
        LeadType::Buyer,
    ),
    (
        "5",
        "Sylvia Simpson",
        "(732) 547-0016",
        "sylviasimp18@yahoo.com",
        "NJ",
        LeadType::Buyer,
    ),
    (
        "6",
        "Olivia Mogavero",
        "(914) 589-3683",
        "omogavero@gmail.com",
        "Greenlawn, NY, 11740",
        LeadType::Buyer,
    ),
    (
        "7",
        "Cheryl Mchugh",
        "(908) 910-8090",
        "cherylmchugh@verizon...",
        "Manasquan, NJ, 08736",
        LeadType::Buyer,
    ),
    (
        "8",
        "Delphine Steward",
        "(732) 642-7904",
        "stewards5752@yahoo.c...",
        "Asbury Park, NJ, 07712",
        LeadType::Buyer,
    ),
    (
        "9",
        "Shirley Hill",
        "(908) 872-6004",
        "raineyhill@comcast.net",
        "272 Mountain Ave, New Providence...",
        LeadType::Seller,
    ),
];

/// The sample leads every session starts with.
pub fn initial_leads() -> Vec<LeadRecord> {
    SAMPLE_LEADS
        .iter()
        .map(|(id, name, phone, email, address, lead_type)| {
            LeadRecord::new(*id, *name, *phone, *email, *address, *lead_type)
        })
        .collect()
}
