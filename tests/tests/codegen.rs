// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use tests::generate_c;

#[test]
fn program_with_every_statement() {
    let code = generate_c(r#"
Pikachu health is 10
Psyduck speed is 1.5
Eevee greeting is "Hello " + "Ash"
health evolves to health * 2
catch age from wildgrass
release health
release speed
release greeting
release age
"#);

    assert_eq!(code, r#"#include <stdio.h>
#include <stdlib.h>
#include <string.h>

int main() {
    int health = 10;
    double speed = 1.500000;
    char str_buffer_0[256];
    strcpy(str_buffer_0, "Hello ");
    strcat(str_buffer_0, "Ash");
    char* greeting = str_buffer_0;
    health = (health * 2);
    int age;
    scanf("%d", &age);
    printf("%d\n", health);
    printf("%f\n", speed);
    printf("%s\n", greeting);
    printf("%d\n", age);
    return 0;
}
"#);
}

#[test]
fn bare_expression_is_printed() {
    let code = generate_c("10 + 5 * 2");
    assert!(code.contains("    printf(\"%d\\n\", (10 + (5 * 2)));\n"));
}
