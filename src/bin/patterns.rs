//! Interactive menu for the credential-format validators.
//!
//! Option 1 opens the password sub-loop, option 2 the institutional-email
//! sub-loop, option 0 exits. Inside a sub-loop, `salir` returns to the
//! menu.

use std::io::{self, BufRead, Write};

use turnstile::{is_valid_institutional_email, is_valid_password};

/// Run one validation sub-loop until `salir` or EOF.
///
/// Returns `false` when stdin closed and the whole program should stop.
fn run_validation_loop(
    input: &mut impl BufRead,
    prompt: &str,
    validate: fn(&str) -> bool,
    valid_msg: &str,
    invalid_msg: &str,
) -> io::Result<bool> {
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("{prompt}");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("salir") {
            return Ok(true);
        }
        if validate(entry) {
            println!("{valid_msg}");
        } else {
            println!("{invalid_msg}");
        }
    }
}

fn main() -> io::Result<()> {
    println!("=== Validación de contraseñas y correos institucionales ===");
    println!("Opciones:");
    println!("1. Validar contraseñas");
    println!("2. Validar correos institucionales");
    println!("0. Salir");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("\nElige una opción (0-2): ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            println!("Saliendo del programa. ¡Adiós!");
            return Ok(());
        }

        let keep_going = match line.trim() {
            "0" => {
                println!("Saliendo del programa. ¡Adiós!");
                return Ok(());
            }
            "1" => {
                println!("\n--- Validación de contraseñas ---");
                run_validation_loop(
                    &mut input,
                    "Escribe una contraseña (o 'salir' para volver al menú): ",
                    is_valid_password,
                    "✅ VÁLIDA según las reglas.",
                    "❌ INVÁLIDA.",
                )?
            }
            "2" => {
                println!("\n--- Validación de correos ---");
                run_validation_loop(
                    &mut input,
                    "Escribe un correo (o 'salir' para volver al menú): ",
                    is_valid_institutional_email,
                    "✅ VÁLIDO según las reglas.",
                    "❌ INVÁLIDO.",
                )?
            }
            _ => {
                println!("⚠️ Opción no válida. Intenta otra vez.");
                true
            }
        };

        if !keep_going {
            println!();
            println!("Saliendo del programa. ¡Adiós!");
            return Ok(());
        }
    }
}
