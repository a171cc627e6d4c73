/// (Spanish, English), in display order
pub const PHRASES: &[(&str, &str)] = &[
    ("Hola, bienvenido.", "Hello, welcome."),
    ("¿Qué desea ordenar?", "What would you like to order?"),
    ("¿Algo más?", "Anything else?"),
    ("¿Para aquí o para llevar?", "For here or to go?"),
    ("¿Con leche?", "With milk?"),
    ("¿Con azúcar?", "With sugar?"),
    ("¿Tamaño grande o pequeño?", "Large or small size?"),
    ("El total es...", "The total is..."),
    (
        "Muchas gracias, que tenga un buen día.",
        "Thank you so much, have a nice day.",
    ),
];
