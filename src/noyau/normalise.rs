// src/noyau/normalise.rs
//
// Normalisation de l’entrée brute :
// 1) suppression de TOUS les blancs ASCII (y compris internes : "1 2" => "12") ;
//    un blanc Unicode (ex. U+00A0) reste et sera refusé par la validation
// 2) réduction des paires de signes, une passe par règle, dans cet ordre :
//      ++ -> +    -- -> +    +- -> -    -+ -> -
//
// Chaque passe remplace les occurrences disjointes de gauche à droite.
// Une suite de 3 signes ou plus n’est donc pas forcément réduite à un seul
// signe ("2+--+3" => "2+++3") ; la validation tranche ensuite.

/// Règles de réduction, appliquées dans l’ordre.
const PAIRES_SIGNES: [(&str, &str); 4] = [("++", "+"), ("--", "+"), ("+-", "-"), ("-+", "-")];

/// Blanc au sens de la saisie : espace, \t, \n, \x0B, \x0C, \r.
pub fn est_blanc(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Normalise une expression brute (sans la valider).
pub fn normaliser(expr: &str) -> String {
    let mut s: String = expr.chars().filter(|&c| !est_blanc(c)).collect();

    for (motif, remplacement) in PAIRES_SIGNES {
        if s.contains(motif) {
            s = s.replace(motif, remplacement);
        }
    }

    s
}
