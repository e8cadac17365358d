/*!
# `PRINT <expression>`

## Purpose
Output a value to the terminal for the operator.

## Remarks
Exactly one expression is printed, followed by a newline.
Arithmetic is `+`, `-`, `*` and `/` on integers with parentheses and
unary minus. Division truncates toward zero. Dividing by zero is a
`DIVIDE BY ZERO` error and reading a variable that was never assigned
is a `VARIABLE NOT DEFINED` error.

## Example
```text
PRINT (7 - 1) * -3 / 4
-4
```

*/
