/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. Variable names are case sensitive and
hold 32-bit signed integers.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = A * 2
40 PRINT A
RUN
10
20
```

*/
