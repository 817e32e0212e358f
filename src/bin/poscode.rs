//! Interactive POS code validator.
//!
//! Reads one candidate per line and reports whether it is a valid code.
//! `gen N` prints the first N codes of the enumeration; `salir`, `exit`,
//! `q` or `quit` (or closing stdin) ends the session.

use std::io::{self, BufRead, Write};

use turnstile::{generate_valid_codes, is_valid_pos_code};

fn main() -> io::Result<()> {
    println!("Validador de códigos POS (LL DDD L, sin '00' consecutivos en los 3 dígitos).");
    println!("Escribe un código para validar, 'gen N' para generar N códigos de prueba, o 'salir' para terminar.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // stdin closed under us: same farewell as an explicit exit
            println!();
            println!("Saliendo.");
            return Ok(());
        }

        let entry = line.trim();
        let lowered = entry.to_lowercase();
        if matches!(lowered.as_str(), "salir" | "exit" | "q" | "quit") {
            println!("Saliendo.");
            return Ok(());
        }

        if let Some(argument) = lowered.strip_prefix("gen ") {
            match argument.split_whitespace().next().unwrap_or("").parse::<usize>() {
                Ok(count) => {
                    println!("Generando {count} códigos de ejemplo:");
                    for (index, code) in generate_valid_codes(Some(count)).enumerate() {
                        println!("{:>4}: {}", index + 1, code);
                    }
                }
                Err(err) => {
                    println!("Uso: gen N  (ej: gen 10). Error: {err}");
                }
            }
            continue;
        }

        let verdict = if is_valid_pos_code(entry) {
            "VÁLIDO"
        } else {
            "INVÁLIDO"
        };
        println!("{entry} -> {verdict}");
    }
}
